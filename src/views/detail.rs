//! Read-only, sectioned projection of a single record.

use std::fmt;

use crate::models::RucRecord;
use crate::status::{self, BadgeVariant};

pub const UNSPECIFIED: &str = "No especificado";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Unspecified,
}

impl FieldValue {
    /// Empty strings count as missing.
    fn text(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => FieldValue::Text(v.to_string()),
            _ => FieldValue::Unspecified,
        }
    }

    fn joined(values: &[String]) -> Self {
        if values.is_empty() {
            FieldValue::Unspecified
        } else {
            FieldValue::Text(values.join(", "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn field(&self, label: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.label == label).map(|f| &f.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetail {
    pub razon_social: String,
    pub ruc: String,
    pub estado: Option<String>,
    pub condicion: Option<String>,
    pub estado_badge: BadgeVariant,
    pub condicion_badge: BadgeVariant,
    pub nombre_comercial: Option<String>,
    pub sections: Vec<Section>,
}

/// Collects fields, skipping the ones that are only shown when present.
struct Builder(Vec<Field>);

impl Builder {
    fn new() -> Self {
        Builder(Vec::new())
    }

    fn text(mut self, label: &'static str, value: Option<&str>) -> Self {
        self.0.push(Field {
            label,
            value: FieldValue::text(value),
        });
        self
    }

    fn joined(mut self, label: &'static str, values: &[String]) -> Self {
        self.0.push(Field {
            label,
            value: FieldValue::joined(values),
        });
        self
    }

    fn text_if_present(self, label: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.text(label, Some(v)),
            _ => self,
        }
    }

    fn joined_if_present(self, label: &'static str, values: &[String]) -> Self {
        if values.is_empty() {
            self
        } else {
            self.joined(label, values)
        }
    }

    fn list_if_present(mut self, label: &'static str, values: &[String]) -> Self {
        if !values.is_empty() {
            self.0.push(Field {
                label,
                value: FieldValue::List(values.to_vec()),
            });
        }
        self
    }

    fn section(self, title: &'static str) -> Section {
        Section {
            title,
            fields: self.0,
        }
    }
}

impl From<&RucRecord> for RecordDetail {
    fn from(r: &RucRecord) -> Self {
        let location = Builder::new()
            .text("Dirección Completa", r.direccion.as_deref())
            .text("Departamento", r.departamento.as_deref())
            .text("Provincia", r.provincia.as_deref())
            .text("Distrito", r.distrito.as_deref())
            .text("Ubigeo", r.ubigeo.as_deref())
            .joined_if_present("Teléfonos", &r.telefonos)
            .section("Ubicación y Contacto");

        let general = Builder::new()
            .text("Tipo de Contribuyente", r.tipo.as_deref())
            .text("Fecha de Inscripción", r.fecha_inscripcion.as_deref())
            .text("Fecha de Baja", r.fecha_baja.as_deref())
            .text("Profesión u Oficio", r.profesion.as_deref())
            .text_if_present("Capital", r.capital.as_deref())
            .section("Información General");

        let systems = Builder::new()
            .text("Sistema de Emisión", r.sist_emision.as_deref())
            .text("Sistema de Contabilidad", r.sist_contabilidad.as_deref())
            .text("Actividad de Comercio Exterior", r.act_exterior.as_deref())
            .list_if_present("Actividades Económicas", &r.act_economicas)
            .list_if_present("Padrones", &r.padrones)
            .section("Sistemas y Actividades");

        let electronic = Builder::new()
            .joined("Sistema de Emisión Electrónica", &r.sist_electronica)
            .text("Fecha Emisor FE", r.fecha_emisor_fe.as_deref())
            .text("Fecha PLE", r.fecha_ple.as_deref())
            .list_if_present("Comprobantes de Pago", &r.cp_pago)
            .list_if_present("CPE Electrónicos", &r.cpe_electronico)
            .section("Comprobantes Electrónicos");

        RecordDetail {
            razon_social: r.razon_social.clone(),
            ruc: r.ruc.clone(),
            estado: r.estado.clone(),
            condicion: r.condicion.clone(),
            estado_badge: status::estado_badge(r.estado.as_deref()),
            condicion_badge: status::condicion_badge(r.condicion.as_deref()),
            nombre_comercial: r.nombre_comercial.clone().filter(|n| !n.is_empty()),
            sections: vec![location, general, systems, electronic],
        }
    }
}

impl RecordDetail {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }
}

fn badge(label: Option<&str>, variant: BadgeVariant) -> String {
    let label = label.unwrap_or("-");
    match variant {
        BadgeVariant::Default => format!("[{label}]"),
        BadgeVariant::Destructive => format!("[!{label}]"),
    }
}

impl fmt::Display for RecordDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.razon_social)?;
        writeln!(
            f,
            "{}  {} {}",
            self.ruc,
            badge(self.estado.as_deref(), self.estado_badge),
            badge(self.condicion.as_deref(), self.condicion_badge)
        )?;
        if let Some(name) = &self.nombre_comercial {
            writeln!(f, "Nombre Comercial: {name}")?;
        }
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "== {} ==", section.title)?;
            for field in &section.fields {
                match &field.value {
                    FieldValue::Text(v) => writeln!(f, "  {}: {}", field.label, v)?,
                    FieldValue::Unspecified => writeln!(f, "  {}: {}", field.label, UNSPECIFIED)?,
                    FieldValue::List(items) => {
                        writeln!(f, "  {}:", field.label)?;
                        for item in items {
                            writeln!(f, "    - {item}")?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
