use serde::{Deserialize, Deserializer, Serialize};

use crate::status::{self, Standing};

// ---------------------------------------------------------------------------
// RucRecord — One registry entry as served by the RUC service
// ---------------------------------------------------------------------------

/// A taxpayer registry entry.
///
/// Records are created and destroyed by the remote service; this crate only
/// reads them and flips `is_delete` through the client. List-valued fields
/// are unordered sets on the service side and tolerate `null` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RucRecord {
    pub ruc: String,
    pub razon_social: String,
    #[serde(default)]
    pub nombre_comercial: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefonos: Vec<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub condicion: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub provincia: Option<String>,
    #[serde(default)]
    pub distrito: Option<String>,
    #[serde(default)]
    pub fecha_inscripcion: Option<String>,
    /// Emission system. The service spells the key `sistEmsion`.
    #[serde(default, rename = "sistEmsion")]
    pub sist_emision: Option<String>,
    #[serde(default)]
    pub sist_contabilidad: Option<String>,
    #[serde(default)]
    pub act_exterior: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub act_economicas: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cp_pago: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sist_electronica: Vec<String>,
    #[serde(default)]
    pub fecha_emisor_fe: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cpe_electronico: Vec<String>,
    #[serde(default)]
    pub fecha_ple: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub padrones: Vec<String>,
    #[serde(default)]
    pub fecha_baja: Option<String>,
    #[serde(default)]
    pub profesion: Option<String>,
    #[serde(default)]
    pub ubigeo: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    /// Soft-delete flag owned by the service. Absent means active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_delete: Option<bool>,
}

impl RucRecord {
    /// Minimal record with only the identifying fields set.
    pub fn new(ruc: impl Into<String>, razon_social: impl Into<String>) -> Self {
        Self {
            ruc: ruc.into(),
            razon_social: razon_social.into(),
            nombre_comercial: None,
            telefonos: Vec::new(),
            tipo: None,
            estado: None,
            condicion: None,
            direccion: None,
            departamento: None,
            provincia: None,
            distrito: None,
            fecha_inscripcion: None,
            sist_emision: None,
            sist_contabilidad: None,
            act_exterior: None,
            act_economicas: Vec::new(),
            cp_pago: Vec::new(),
            sist_electronica: Vec::new(),
            fecha_emisor_fe: None,
            cpe_electronico: Vec::new(),
            fecha_ple: None,
            padrones: Vec::new(),
            fecha_baja: None,
            profesion: None,
            ubigeo: None,
            capital: None,
            is_delete: None,
        }
    }

    /// Whether the service has soft-deleted this record.
    pub fn is_deleted(&self) -> bool {
        self.is_delete.unwrap_or(false)
    }

    pub fn is_active(&self) -> bool {
        status::is_active(self.estado.as_deref())
    }

    pub fn is_habido(&self) -> bool {
        status::is_habido(self.condicion.as_deref())
    }

    pub fn standing(&self) -> Standing {
        status::standing(self.estado.as_deref(), self.condicion.as_deref())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
