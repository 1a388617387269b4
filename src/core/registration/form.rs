//! Registration form schema
//!
//! Declares the ordered fields of the registration form (labels, icons,
//! placeholders, native constraints) and the transient draft the browser
//! fills in before posting. The same schema drives rendering and the
//! constraint checks, so the two cannot drift apart.

use std::fmt;

use crate::core::catalog::{CatalogCategory, OptionSet};
use crate::core::registration::RegisterVoterRequest;

/// Input names of the registration submission, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Document,
    Phone,
    LeaderId,
    CoordinatorId,
    MunicipalityId,
    NeighborhoodId,
    Address,
    Consent,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Document,
        FieldName::Phone,
        FieldName::LeaderId,
        FieldName::CoordinatorId,
        FieldName::MunicipalityId,
        FieldName::NeighborhoodId,
        FieldName::Address,
        FieldName::Consent,
    ];

    /// HTML `name` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::LastName => "last_name",
            FieldName::Document => "document",
            FieldName::Phone => "phone",
            FieldName::LeaderId => "leader_id",
            FieldName::CoordinatorId => "coordinator_id",
            FieldName::MunicipalityId => "municipality_id",
            FieldName::NeighborhoodId => "neighborhood_id",
            FieldName::Address => "address",
            FieldName::Consent => "consent",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character restriction of a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `0-9`
    Digits,
    /// `0-9`, space and `+`
    Phone,
}

impl CharClass {
    /// Value of the HTML `pattern` attribute
    pub const fn html_pattern(self) -> &'static str {
        match self {
            CharClass::Digits => "[0-9]*",
            CharClass::Phone => "[0-9+ ]*",
        }
    }

    pub fn allows(self, c: char) -> bool {
        match self {
            CharClass::Digits => c.is_ascii_digit(),
            CharClass::Phone => c.is_ascii_digit() || c == ' ' || c == '+',
        }
    }

    /// Whether the whole value satisfies the pattern
    pub fn matches(self, value: &str) -> bool {
        value.chars().all(|c| self.allows(c))
    }

    /// Drop the characters the pattern would reject
    pub fn filter(self, value: &str) -> String {
        value.chars().filter(|c| self.allows(*c)).collect()
    }
}

/// How a field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        input_type: &'static str,
        input_mode: Option<&'static str>,
        char_class: Option<CharClass>,
    },
    Select(CatalogCategory),
}

const PLAIN_TEXT: FieldKind = FieldKind::Text {
    input_type: "text",
    input_mode: None,
    char_class: None,
};

/// Static description of one form control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: &'static str,
    /// Material Symbols ligature
    pub icon: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn char_class(&self) -> Option<CharClass> {
        match self.kind {
            FieldKind::Text { char_class, .. } => char_class,
            _ => None,
        }
    }

    pub fn category(&self) -> Option<CatalogCategory> {
        match self.kind {
            FieldKind::Select(category) => Some(category),
            _ => None,
        }
    }
}

/// Visible inputs and selects, in render order. Consent is rendered apart.
pub static FIELD_SPECS: [FieldSpec; 9] = [
    FieldSpec {
        name: FieldName::FirstName,
        label: "Nombres",
        icon: "person",
        placeholder: "Juan",
        kind: PLAIN_TEXT,
        required: true,
    },
    FieldSpec {
        name: FieldName::LastName,
        label: "Apellidos",
        icon: "badge",
        placeholder: "Pérez",
        kind: PLAIN_TEXT,
        required: true,
    },
    FieldSpec {
        name: FieldName::Document,
        label: "Documento de Identidad",
        icon: "branding_watermark",
        placeholder: "123456789",
        kind: FieldKind::Text {
            input_type: "text",
            input_mode: Some("numeric"),
            char_class: Some(CharClass::Digits),
        },
        required: true,
    },
    FieldSpec {
        name: FieldName::Phone,
        label: "Teléfono / Celular",
        icon: "smartphone",
        placeholder: "3001234567",
        kind: FieldKind::Text {
            input_type: "tel",
            input_mode: Some("numeric"),
            char_class: Some(CharClass::Phone),
        },
        required: true,
    },
    FieldSpec {
        name: FieldName::LeaderId,
        label: "Líder",
        icon: "diversity_3",
        placeholder: "Selecciona un líder",
        kind: FieldKind::Select(CatalogCategory::Leaders),
        required: true,
    },
    FieldSpec {
        name: FieldName::CoordinatorId,
        label: "Coordinador",
        icon: "manage_accounts",
        placeholder: "Selecciona un coordinador",
        kind: FieldKind::Select(CatalogCategory::Coordinators),
        required: true,
    },
    FieldSpec {
        name: FieldName::MunicipalityId,
        label: "Ciudad / Municipio",
        icon: "location_city",
        placeholder: "Selecciona tu ciudad",
        kind: FieldKind::Select(CatalogCategory::Municipalities),
        required: true,
    },
    FieldSpec {
        name: FieldName::NeighborhoodId,
        label: "Barrio",
        icon: "holiday_village",
        placeholder: "Selecciona tu barrio",
        kind: FieldKind::Select(CatalogCategory::Neighborhoods),
        required: true,
    },
    FieldSpec {
        name: FieldName::Address,
        label: "Dirección de Residencia",
        icon: "home_pin",
        placeholder: "Calle 123 # 45 - 67",
        kind: PLAIN_TEXT,
        required: true,
    },
];

/// Two-column rows of the form layout
pub static FIELD_ROWS: [&[FieldName]; 5] = [
    &[FieldName::FirstName, FieldName::LastName],
    &[FieldName::Document, FieldName::Phone],
    &[FieldName::LeaderId, FieldName::CoordinatorId],
    &[FieldName::MunicipalityId, FieldName::NeighborhoodId],
    &[FieldName::Address],
];

pub const CONSENT_PREFIX: &str = "Acepto la";
pub const CONSENT_POLICY_LINK_TEXT: &str = "política de tratamiento de datos personales";
pub const CONSENT_STATEMENT: &str = "Entiendo que mis datos serán usados para fines de comunicación política del movimiento Oxígeno.";

pub fn field_spec(name: FieldName) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|spec| spec.name == name)
}

/// A constraint the draft does not satisfy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("El campo '{0}' es obligatorio")]
    Missing(FieldName),

    #[error("El campo '{0}' contiene caracteres no permitidos")]
    InvalidCharacters(FieldName),

    #[error("El valor de '{0}' no es una opción válida")]
    UnknownOption(FieldName),

    #[error("Debes aceptar el consentimiento para continuar")]
    ConsentRequired,
}

/// The in-browser submission, empty on first render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    first_name: String,
    last_name: String,
    document: String,
    phone: String,
    leader_id: String,
    coordinator_id: String,
    municipality_id: String,
    neighborhood_id: String,
    address: String,
    consent: bool,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, name: FieldName) -> Option<&String> {
        match name {
            FieldName::FirstName => Some(&self.first_name),
            FieldName::LastName => Some(&self.last_name),
            FieldName::Document => Some(&self.document),
            FieldName::Phone => Some(&self.phone),
            FieldName::LeaderId => Some(&self.leader_id),
            FieldName::CoordinatorId => Some(&self.coordinator_id),
            FieldName::MunicipalityId => Some(&self.municipality_id),
            FieldName::NeighborhoodId => Some(&self.neighborhood_id),
            FieldName::Address => Some(&self.address),
            FieldName::Consent => None,
        }
    }

    fn slot_mut(&mut self, name: FieldName) -> Option<&mut String> {
        match name {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::Document => Some(&mut self.document),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::LeaderId => Some(&mut self.leader_id),
            FieldName::CoordinatorId => Some(&mut self.coordinator_id),
            FieldName::MunicipalityId => Some(&mut self.municipality_id),
            FieldName::NeighborhoodId => Some(&mut self.neighborhood_id),
            FieldName::Address => Some(&mut self.address),
            FieldName::Consent => None,
        }
    }

    /// Current value; consent reads as `"on"` when checked
    pub fn get(&self, name: FieldName) -> &str {
        match self.slot(name) {
            Some(value) => value,
            None if self.consent => "on",
            None => "",
        }
    }

    /// Keystroke update: the value is filtered through the field's pattern
    pub fn set(&mut self, name: FieldName, value: &str) {
        if name == FieldName::Consent {
            self.consent = !value.is_empty();
            return;
        }

        let value = match field_spec(name).and_then(FieldSpec::char_class) {
            Some(class) => class.filter(value),
            None => value.to_string(),
        };

        if let Some(slot) = self.slot_mut(name) {
            *slot = value;
        }
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn set_consent(&mut self, checked: bool) {
        self.consent = checked;
    }

    /// Every constraint the draft violates, in form order
    pub fn violations(&self, options: &OptionSet) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for spec in &FIELD_SPECS {
            let value = self.get(spec.name);

            if value.trim().is_empty() {
                if spec.required {
                    errors.push(FieldError::Missing(spec.name));
                }
                continue;
            }

            match spec.kind {
                FieldKind::Text {
                    char_class: Some(class),
                    ..
                } if !class.matches(value) => {
                    errors.push(FieldError::InvalidCharacters(spec.name));
                }
                FieldKind::Select(category) if !options.contains(category, value) => {
                    errors.push(FieldError::UnknownOption(spec.name));
                }
                _ => {}
            }
        }

        if !self.consent {
            errors.push(FieldError::ConsentRequired);
        }

        errors
    }

    pub fn is_complete(&self, options: &OptionSet) -> bool {
        self.violations(options).is_empty()
    }

    /// The `(name, value)` pairs a native submission posts.
    /// An unchecked consent box posts nothing.
    pub fn form_values(&self) -> Vec<(&'static str, String)> {
        FieldName::ALL
            .into_iter()
            .filter(|f| *f != FieldName::Consent || self.consent)
            .map(|f| (f.as_str(), self.get(f).to_string()))
            .collect()
    }

    /// Convert a complete draft into the JSON request body
    pub fn to_request(
        &self,
        options: &OptionSet,
        captcha_token: impl Into<String>,
    ) -> Result<RegisterVoterRequest, Vec<FieldError>> {
        let errors = self.violations(options);
        if !errors.is_empty() {
            return Err(errors);
        }

        let id = |field: FieldName| -> Result<i32, Vec<FieldError>> {
            self.get(field)
                .trim()
                .parse::<i32>()
                .map_err(|_| vec![FieldError::UnknownOption(field)])
        };

        Ok(RegisterVoterRequest {
            document: self.document.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            municipality_id: id(FieldName::MunicipalityId)?,
            neighborhood_id: id(FieldName::NeighborhoodId)?,
            coordinator_id: id(FieldName::CoordinatorId)?,
            leader_id: id(FieldName::LeaderId)?,
            consent: self.consent,
            captcha_token: captcha_token.into(),
        })
    }
}
