use serde::{Deserialize, Deserializer, Serialize};

/// Consultant sex as recorded on the intake form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Sex {
    Female,
    Male,
    #[default]
    Unspecified,
}

impl Sex {
    /// Parse the stored form value ("Femenino" / "Masculino")
    pub fn from_wire(s: &str) -> Self {
        match s.trim() {
            "Femenino" => Sex::Female,
            "Masculino" => Sex::Male,
            _ => Sex::Unspecified,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Sex::Female => "Femenino",
            Sex::Male => "Masculino",
            Sex::Unspecified => "",
        }
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Sex::from_wire).unwrap_or_default())
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.as_wire().to_string()
    }
}

/// Identity document type
///
/// The form prints these as "T.I." (minor's ID), "C.C." (citizen ID) and
/// "NUIP" (the third box, used for foreign and other IDs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum DocumentType {
    MinorId,
    CitizenId,
    ForeignId,
    #[default]
    Unspecified,
}

impl DocumentType {
    pub fn from_wire(s: &str) -> Self {
        match s.trim() {
            "T.I." => DocumentType::MinorId,
            "C.C." => DocumentType::CitizenId,
            "NUIP" => DocumentType::ForeignId,
            _ => DocumentType::Unspecified,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            DocumentType::MinorId => "T.I.",
            DocumentType::CitizenId => "C.C.",
            DocumentType::ForeignId => "NUIP",
            DocumentType::Unspecified => "",
        }
    }
}

impl<'de> Deserialize<'de> for DocumentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(DocumentType::from_wire).unwrap_or_default())
    }
}

impl From<DocumentType> for String {
    fn from(doc: DocumentType) -> Self {
        doc.as_wire().to_string()
    }
}

/// Final disposition assigned by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FinalDisposition {
    #[serde(rename = "asesoria_consulta")]
    AdvisoryConsultation,
    #[serde(rename = "reparto")]
    Distribution,
    #[serde(rename = "auto_reparto")]
    AutoDistribution,
    #[serde(rename = "solicitud_conciliacion")]
    ConciliationRequest,
}

impl FinalDisposition {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim() {
            "asesoria_consulta" => Some(FinalDisposition::AdvisoryConsultation),
            "reparto" => Some(FinalDisposition::Distribution),
            "auto_reparto" => Some(FinalDisposition::AutoDistribution),
            "solicitud_conciliacion" => Some(FinalDisposition::ConciliationRequest),
            _ => None,
        }
    }
}

fn disposition_from_wire<'de, D>(deserializer: D) -> Result<Option<FinalDisposition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(FinalDisposition::from_wire))
}

/// A fully resolved Control Operativo case
///
/// Field order follows the institutional form. Every text field may be
/// empty; numeric fields use 0 for "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    pub id: u32,

    // Identification
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "fecha_dia")]
    pub day: u32,
    #[serde(rename = "fecha_mes")]
    pub month: u32,
    #[serde(rename = "fecha_ano")]
    pub year: u32,
    #[serde(rename = "nombre_docente_responsable")]
    pub professor_name: String,
    #[serde(rename = "nombre_estudiante")]
    pub student_name: String,
    #[serde(rename = "area_consulta")]
    pub consultation_area: String,
    #[serde(rename = "remitido_por")]
    pub referred_by: String,

    // Consultant
    #[serde(rename = "nombre_consultante")]
    pub consultant_name: String,
    #[serde(rename = "correo_electronico")]
    pub email: String,
    #[serde(rename = "edad")]
    pub age: u32,
    #[serde(rename = "fecha_nacimiento_dia")]
    pub birth_day: u32,
    #[serde(rename = "fecha_nacimiento_mes")]
    pub birth_month: u32,
    #[serde(rename = "fecha_nacimiento_ano")]
    pub birth_year: u32,
    #[serde(rename = "lugar_nacimiento")]
    pub birthplace: String,
    #[serde(rename = "sexo")]
    pub sex: Sex,
    #[serde(rename = "tipo_documento")]
    pub document_type: DocumentType,
    #[serde(rename = "numero_documento")]
    pub document_number: String,
    #[serde(rename = "lugar_expedicion")]
    pub issued_in: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "barrio")]
    pub neighborhood: String,
    #[serde(rename = "estrato")]
    pub stratum: u8,
    #[serde(rename = "numero_telefonico")]
    pub phone: String,
    #[serde(rename = "numero_celular")]
    pub cell_phone: String,
    #[serde(rename = "estado_civil")]
    pub civil_status: String,
    #[serde(rename = "escolaridad")]
    pub education: String,
    #[serde(rename = "profesion_oficio")]
    pub occupation: String,

    // Narrative and assessments
    #[serde(rename = "descripcion_caso")]
    pub case_description: String,
    #[serde(rename = "concepto_estudiante")]
    pub student_opinion: String,
    #[serde(rename = "concepto_asesor")]
    pub advisor_opinion: String,

    #[serde(
        rename = "estado_resultado",
        deserialize_with = "disposition_from_wire"
    )]
    pub disposition: Option<FinalDisposition>,
}

impl CaseRecord {
    /// Birth date as "Día: d   Mes: m   Año: y", or blank slots when any part is missing
    pub fn birth_date_text(&self) -> String {
        if self.birth_day > 0 && self.birth_month > 0 && self.birth_year > 0 {
            format!(
                "Día: {}   Mes: {}   Año: {}",
                self.birth_day, self.birth_month, self.birth_year
            )
        } else {
            "Día:    Mes:    Año:".to_string()
        }
    }
}

/// Format a numeric form value, leaving the cell blank for 0
pub fn optional_number<N: Into<u32>>(n: N) -> String {
    let n = n.into();
    if n > 0 {
        n.to_string()
    } else {
        String::new()
    }
}
