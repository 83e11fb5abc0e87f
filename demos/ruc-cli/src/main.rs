mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ruc_sdk::views::{Notice, RecordDetail, SearchOutcome};
use ruc_sdk::RucSdk;

/// Consulta y administración de RUCs guardados.
#[derive(Parser, Debug)]
#[command(name = "ruc", version, about)]
struct Cli {
    /// Base URL of the RUC service. Falls back to RUC_API_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a single RUC.
    Consulta { ruc: String },
    /// Show one page of stored RUCs.
    Listado {
        /// Show soft-deleted RUCs instead of active ones.
        #[arg(long)]
        borrados: bool,
        #[arg(long, default_value_t = 1)]
        pagina: usize,
    },
    /// Soft-delete a stored RUC, then show the refreshed list.
    Borrar { ruc: String },
    /// Restore a soft-deleted RUC, then show the refreshed list.
    Restaurar { ruc: String },
    /// Show the details of a stored RUC.
    Detalle { ruc: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = RucSdk::builder().from_env();
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    let sdk = match builder.build() {
        Ok(sdk) => sdk,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(%sdk, "SDK ready");

    let ok = match cli.command {
        Commands::Consulta { ruc } => consulta(&sdk, &ruc),
        Commands::Listado { borrados, pagina } => {
            let mut list = sdk.list();
            let ok = report(list.load());
            list.show_deleted(borrados);
            list.go_to_page(pagina);
            print!("{}", render::PageTable(&list.page()));
            ok
        }
        Commands::Borrar { ruc } => mutate(&sdk, &ruc, true),
        Commands::Restaurar { ruc } => mutate(&sdk, &ruc, false),
        Commands::Detalle { ruc } => {
            let mut list = sdk.list();
            if !report(list.load()) {
                return ExitCode::FAILURE;
            }
            list.select(Some(ruc.as_str()));
            match list.state().selected_record() {
                Some(record) => {
                    print!("{}", RecordDetail::from(record));
                    true
                }
                None => {
                    eprintln!("{}", render::EMPTY_DETAIL);
                    false
                }
            }
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print a notice to stderr. Returns `false` for error notices.
fn report(notice: Option<Notice>) -> bool {
    match notice {
        Some(n) => {
            eprintln!("{n}");
            !n.is_error()
        }
        None => true,
    }
}

fn consulta(sdk: &RucSdk, input: &str) -> bool {
    let mut form = sdk.search();
    match form.submit(input) {
        SearchOutcome::Found(record) => {
            print!("{}", RecordDetail::from(&record));
            true
        }
        SearchOutcome::Rejected(message) => {
            eprintln!("RUC: {message}");
            false
        }
        SearchOutcome::Failed(notice) => report(Some(notice)),
    }
}

fn mutate(sdk: &RucSdk, ruc: &str, delete: bool) -> bool {
    let mut list = sdk.list();
    if !report(list.load()) {
        return false;
    }
    let notices = if delete {
        list.soft_delete(ruc)
    } else {
        list.restore(ruc)
    };
    let mut ok = true;
    for notice in notices {
        ok &= report(Some(notice));
    }
    list.show_deleted(!delete);
    print!("{}", render::PageTable(&list.page()));
    ok
}
