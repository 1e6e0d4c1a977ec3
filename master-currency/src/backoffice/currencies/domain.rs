pub mod schema {
    //! Canonical definition of a currency record.
    //!
    //! Both the storage constraints and the input validator are derived from
    //! [`FIELDS`], so the two can not drift apart.

    pub const TABLE: &str = "currency";
    pub const TITLE: &str = "masterCurrencyModel";
    pub const JSON_SCHEMA_DRAFT: &str = "http://json-schema.org/draft-06/schema#";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FieldKind {
        String,
        /// A string holding an RFC 3339 timestamp.
        DateTime,
        Number,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldSpec {
        pub name: &'static str,
        pub kind: FieldKind,
        pub required: bool,
        pub min_length: Option<usize>,
        pub max_length: Option<usize>,
        pub allowed: &'static [&'static str],
        pub unique: bool,
    }

    impl FieldSpec {
        const fn new(name: &'static str, kind: FieldKind) -> Self {
            Self {
                name,
                kind,
                required: false,
                min_length: None,
                max_length: None,
                allowed: &[],
                unique: false,
            }
        }

        const fn string(name: &'static str) -> Self {
            Self::new(name, FieldKind::String)
        }

        const fn required(mut self) -> Self {
            self.required = true;
            self
        }

        const fn length(mut self, min: usize, max: usize) -> Self {
            self.min_length = Some(min);
            self.max_length = Some(max);
            self
        }

        const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
            self.allowed = allowed;
            self
        }

        const fn unique(mut self) -> Self {
            self.unique = true;
            self
        }

        /// snake_case form of the field name, used for index names.
        pub fn index_name(&self) -> String {
            let mut out = String::with_capacity(self.name.len() + 4);
            for c in self.name.chars() {
                if c.is_ascii_uppercase() {
                    out.push('_');
                    out.push(c.to_ascii_lowercase());
                } else {
                    out.push(c);
                }
            }
            out
        }
    }

    pub const FIELDS: &[FieldSpec] = &[
        FieldSpec::string("tenantId").required().length(1, 64),
        FieldSpec::string("currencyCode")
            .required()
            .length(1, 5)
            .unique(),
        FieldSpec::string("currencyName").required().length(1, 50),
        FieldSpec::string("decimalDigit"),
        FieldSpec::string("delimiter"),
        FieldSpec::new("createdDate", FieldKind::DateTime),
        FieldSpec::new("lastUpdatedDate", FieldKind::DateTime),
        FieldSpec::string("createdBy").length(1, 100),
        FieldSpec::string("updatedBy").length(1, 100),
        FieldSpec::new("objVersion", FieldKind::Number),
        FieldSpec::string("enabledFlag").one_of(&["0", "1"]),
        FieldSpec::string("currencyLocale"),
    ];

    pub fn field(name: &str) -> Option<&'static FieldSpec> {
        FIELDS.iter().find(|field| field.name == name)
    }

    /// JSON-Schema document equivalent to [`FIELDS`].
    pub fn json_schema() -> serde_json::Value {
        use serde_json::{json, Map, Value};

        let mut properties = Map::new();
        for field in FIELDS {
            let mut property = Map::new();
            let ty = match field.kind {
                FieldKind::String | FieldKind::DateTime => "string",
                FieldKind::Number => "number",
            };
            property.insert("type".into(), json!(ty));
            if field.kind == FieldKind::DateTime {
                property.insert("format".into(), json!("date-time"));
            }
            if let Some(min) = field.min_length {
                property.insert("minLength".into(), json!(min));
            }
            if let Some(max) = field.max_length {
                property.insert("maxLength".into(), json!(max));
            }
            if !field.allowed.is_empty() {
                property.insert("enum".into(), json!(field.allowed));
            }
            if field.kind == FieldKind::Number {
                property.insert("maximum".into(), json!(i64::MAX));
            }
            if field.unique {
                property.insert("unique".into(), json!(true));
            }
            properties.insert(field.name.into(), Value::Object(property));
        }

        let required: Vec<&str> = FIELDS
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name)
            .collect();

        json!({
            "$schema": JSON_SCHEMA_DRAFT,
            "title": TITLE,
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

pub mod currency_id {
    use std::{fmt::Display, str::FromStr};

    use super::errors::MalformedIdentifier;

    pub const ID_LENGTH: usize = 20;

    /// Key assigned by the store when a record is created.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(try_from = "String", into = "String")]
    pub struct CurrencyId(String);

    impl CurrencyId {
        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl FromStr for CurrencyId {
        type Err = MalformedIdentifier;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let well_formed = s.len() == ID_LENGTH
                && s
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());

            if well_formed {
                Ok(Self(s.to_owned()))
            } else {
                Err(MalformedIdentifier(s.to_owned()))
            }
        }
    }

    impl TryFrom<String> for CurrencyId {
        type Error = MalformedIdentifier;

        fn try_from(value: String) -> Result<Self, Self::Error> {
            value.parse()
        }
    }

    impl From<CurrencyId> for String {
        fn from(id: CurrencyId) -> Self {
            id.0
        }
    }

    impl Display for CurrencyId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }
}

pub mod enabled_flag {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    pub enum EnabledFlag {
        #[serde(rename = "0")]
        Disabled,
        #[serde(rename = "1")]
        Enabled,
    }
}

pub mod currency {
    use super::{currency_id::CurrencyId, enabled_flag::EnabledFlag};

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CurrencyRecord {
        pub tenant_id: String,
        pub currency_code: String,
        pub currency_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub decimal_digit: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub delimiter: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub created_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub last_updated_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub created_by: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub updated_by: Option<String>,
        /// Advanced by callers on update; the store does not enforce it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub obj_version: Option<serde_json::Number>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub enabled_flag: Option<EnabledFlag>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub currency_locale: Option<String>,
    }

    impl CurrencyRecord {
        pub fn new(
            tenant_id: impl Into<String>,
            currency_code: impl Into<String>,
            currency_name: impl Into<String>,
        ) -> Self {
            Self {
                tenant_id: tenant_id.into(),
                currency_code: currency_code.into(),
                currency_name: currency_name.into(),
                decimal_digit: None,
                delimiter: None,
                created_date: None,
                last_updated_date: None,
                created_by: None,
                updated_by: None,
                obj_version: None,
                enabled_flag: None,
                currency_locale: None,
            }
        }
    }

    /// A record as read back from the store, serialized flat:
    /// `{"id": "...", "tenantId": "...", ...}`.
    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    pub struct StoredCurrency {
        pub id: CurrencyId,
        #[serde(flatten)]
        pub record: CurrencyRecord,
    }
}

pub mod currency_field {
    use std::{fmt::Display, str::FromStr};

    use super::{errors::UnknownAttribute, schema};

    /// Attributes a record can be looked up by.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum CurrencyField {
        TenantId,
        CurrencyCode,
        CurrencyName,
        DecimalDigit,
        Delimiter,
        CreatedDate,
        LastUpdatedDate,
        CreatedBy,
        UpdatedBy,
        ObjVersion,
        EnabledFlag,
        CurrencyLocale,
    }

    impl CurrencyField {
        pub const ALL: [CurrencyField; 12] = [
            Self::TenantId,
            Self::CurrencyCode,
            Self::CurrencyName,
            Self::DecimalDigit,
            Self::Delimiter,
            Self::CreatedDate,
            Self::LastUpdatedDate,
            Self::CreatedBy,
            Self::UpdatedBy,
            Self::ObjVersion,
            Self::EnabledFlag,
            Self::CurrencyLocale,
        ];

        /// Name of the field on the wire and in the store.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::TenantId => "tenantId",
                Self::CurrencyCode => "currencyCode",
                Self::CurrencyName => "currencyName",
                Self::DecimalDigit => "decimalDigit",
                Self::Delimiter => "delimiter",
                Self::CreatedDate => "createdDate",
                Self::LastUpdatedDate => "lastUpdatedDate",
                Self::CreatedBy => "createdBy",
                Self::UpdatedBy => "updatedBy",
                Self::ObjVersion => "objVersion",
                Self::EnabledFlag => "enabledFlag",
                Self::CurrencyLocale => "currencyLocale",
            }
        }

        pub fn spec(self) -> &'static schema::FieldSpec {
            match schema::field(self.as_str()) {
                Some(spec) => spec,
                None => unreachable!("every queryable field is part of the schema"),
            }
        }
    }

    impl FromStr for CurrencyField {
        type Err = UnknownAttribute;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            Self::ALL
                .into_iter()
                .find(|field| field.as_str() == s)
                .ok_or_else(|| UnknownAttribute(s.to_owned()))
        }
    }

    impl Display for CurrencyField {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }
}

pub mod lookup {
    use serde::{ser::SerializeMap, Serialize, Serializer};

    /// Result of a single-record lookup. `Empty` is a valid answer, not an
    /// error, and serializes as `{}`.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Lookup<T> {
        Found(T),
        Empty,
    }

    impl<T> Lookup<T> {
        pub fn is_empty(&self) -> bool {
            matches!(self, Lookup::Empty)
        }

        pub fn into_option(self) -> Option<T> {
            match self {
                Lookup::Found(value) => Some(value),
                Lookup::Empty => None,
            }
        }
    }

    impl<T> From<Option<T>> for Lookup<T> {
        fn from(value: Option<T>) -> Self {
            value.map_or(Lookup::Empty, Lookup::Found)
        }
    }

    impl<T: Serialize> Serialize for Lookup<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Lookup::Found(value) => value.serialize(serializer),
                Lookup::Empty => serializer.serialize_map(Some(0))?.end(),
            }
        }
    }
}

pub mod errors {
    use super::validation::Violation;

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("malformed currency identifier `{0}`")]
    pub struct MalformedIdentifier(pub String);

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("unknown currency attribute `{0}`")]
    pub struct UnknownAttribute(pub String);

    /// Storage-level rejection of a record.
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum ConstraintViolation {
        #[error("currency code `{0}` already exists")]
        Duplicate(String),
        #[error("record rejected by the store: {0}")]
        Rejected(String),
    }

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    pub enum CurrencyError {
        #[error("illegal argument: {0} is null or undefined")]
        IllegalArgument(&'static str),
        #[error("validation failed: {}", display_violations(.0))]
        Validation(Vec<Violation>),
        #[error(transparent)]
        ConstraintViolation(#[from] ConstraintViolation),
        #[error(transparent)]
        MalformedIdentifier(#[from] MalformedIdentifier),
    }

    fn display_violations(violations: &[Violation]) -> String {
        violations
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub mod validation {
    //! Structural checks of a candidate record against [`schema::FIELDS`].

    use std::fmt::Display;

    use serde_json::Value;

    use super::schema::{self, FieldKind, FieldSpec};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Constraint {
        NotAnObject,
        Required,
        Type { expected: &'static str },
        MinLength { min: usize },
        MaxLength { max: usize },
        /// Integers above this do not fit a store integer.
        Maximum { max: i64 },
        Enum { allowed: &'static [&'static str] },
        Format { format: &'static str },
    }

    impl Display for Constraint {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::NotAnObject => write!(f, "must be an object"),
                Self::Required => write!(f, "is required"),
                Self::Type { expected } => write!(f, "must be of type {expected}"),
                Self::MinLength { min } => write!(f, "must have at least {min} characters"),
                Self::MaxLength { max } => write!(f, "must have at most {max} characters"),
                Self::Maximum { max } => write!(f, "must be at most {max}"),
                Self::Enum { allowed } => write!(f, "must be one of {}", allowed.join(", ")),
                Self::Format { format } => write!(f, "must be a valid {format}"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Violation {
        /// Field name, empty for the record itself.
        pub path: String,
        pub constraint: Constraint,
    }

    impl Violation {
        fn new(path: &str, constraint: Constraint) -> Self {
            Self {
                path: path.to_owned(),
                constraint,
            }
        }
    }

    impl Display for Violation {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            if self.path.is_empty() {
                write!(f, "record {}", self.constraint)
            } else {
                write!(f, "{}: {}", self.path, self.constraint)
            }
        }
    }

    /// Returns every violation, in schema field order. Properties not in the
    /// schema are ignored.
    pub fn validate(candidate: &Value) -> Result<(), Vec<Violation>> {
        let Some(object) = candidate.as_object() else {
            return Err(vec![Violation::new("", Constraint::NotAnObject)]);
        };

        let violations: Vec<Violation> = schema::FIELDS
            .iter()
            .flat_map(|field| check_field(field, object.get(field.name)))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    fn check_field(field: &FieldSpec, value: Option<&Value>) -> Vec<Violation> {
        let Some(value) = value else {
            return if field.required {
                vec![Violation::new(field.name, Constraint::Required)]
            } else {
                Vec::new()
            };
        };

        let text = match (field.kind, value) {
            (FieldKind::Number, Value::Number(number)) => {
                return if number.is_u64() && number.as_i64().is_none() {
                    vec![Violation::new(field.name, Constraint::Maximum { max: i64::MAX })]
                } else {
                    Vec::new()
                };
            }
            (FieldKind::Number, _) => {
                return vec![Violation::new(
                    field.name,
                    Constraint::Type { expected: "number" },
                )]
            }
            (FieldKind::String | FieldKind::DateTime, Value::String(text)) => text,
            (FieldKind::String | FieldKind::DateTime, _) => {
                return vec![Violation::new(
                    field.name,
                    Constraint::Type { expected: "string" },
                )]
            }
        };

        let mut violations = Vec::new();
        let length = text.chars().count();

        if let Some(min) = field.min_length.filter(|min| length < *min) {
            violations.push(Violation::new(field.name, Constraint::MinLength { min }));
        }
        if let Some(max) = field.max_length.filter(|max| length > *max) {
            violations.push(Violation::new(field.name, Constraint::MaxLength { max }));
        }
        if !field.allowed.is_empty() && !field.allowed.contains(&text.as_str()) {
            violations.push(Violation::new(
                field.name,
                Constraint::Enum {
                    allowed: field.allowed,
                },
            ));
        }
        if field.kind == FieldKind::DateTime && chrono::DateTime::parse_from_rfc3339(text).is_err()
        {
            violations.push(Violation::new(
                field.name,
                Constraint::Format {
                    format: "date-time",
                },
            ));
        }

        violations
    }
}

pub mod repository {
    use serde_json::Value;

    use crate::prelude::{AppError, InfrastructureError};

    use super::{
        currency::{CurrencyRecord, StoredCurrency},
        currency_field::CurrencyField,
        errors::{ConstraintViolation, MalformedIdentifier},
    };

    #[async_trait::async_trait]
    pub trait Repository: 'static + Send + Sync {
        async fn save(
            &self,
            record: CurrencyRecord,
        ) -> Result<StoredCurrency, AppError<ConstraintViolation>>;

        /// `limit < 1` returns every record.
        async fn find_all(&self, limit: i64) -> Result<Vec<StoredCurrency>, InfrastructureError>;

        async fn find_one(
            &self,
            field: CurrencyField,
            value: Value,
        ) -> Result<Option<StoredCurrency>, InfrastructureError>;

        async fn find_many(
            &self,
            field: CurrencyField,
            value: Value,
        ) -> Result<Vec<StoredCurrency>, InfrastructureError>;

        async fn find_by_id(
            &self,
            id: &str,
        ) -> Result<Option<StoredCurrency>, AppError<MalformedIdentifier>>;

        /// Removes every record. Only meant for resetting test fixtures.
        async fn delete_all(&self) -> Result<(), InfrastructureError>;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        currency::{CurrencyRecord, StoredCurrency},
        currency_field::CurrencyField,
        currency_id::CurrencyId,
        enabled_flag::EnabledFlag,
        errors::{MalformedIdentifier, UnknownAttribute},
        lookup::Lookup,
        schema,
        validation::{validate, Constraint, Violation},
    };

    fn valid() -> serde_json::Value {
        json!({
            "tenantId": "tenIdmasteCurr",
            "currencyCode": "de894",
            "currencyName": "RUPEESIndia",
            "decimalDigit": "4",
            "delimiter": "8",
            "createdDate": "2018-06-12T10:15:30.000Z",
            "lastUpdatedDate": "2018-06-12T10:15:30.000Z",
            "createdBy": "SYSTEM",
            "updatedBy": "SYSTEM",
            "objVersion": 123,
            "enabledFlag": "1",
            "currencyLocale": "BANGALORE"
        })
    }

    fn constraints_of(violations: &[Violation], path: &str) -> Vec<Constraint> {
        violations
            .iter()
            .filter(|v| v.path == path)
            .map(|v| v.constraint.clone())
            .collect()
    }

    #[test]
    fn accepts_complete_record() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn accepts_only_required_fields() {
        let candidate = json!({"tenantId": "t", "currencyCode": "INR", "currencyName": "Rupee"});
        assert_eq!(validate(&candidate), Ok(()));
    }

    #[test]
    fn reports_every_violation_in_field_order() {
        let candidate = json!({
            "currencyCode": "master12",
            "currencyName": "123RUPEES",
            "decimalDigit": 4125,
            "delimiter": "89"
        });

        let violations = validate(&candidate).unwrap_err();
        let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();

        assert_eq!(paths, vec!["tenantId", "currencyCode", "decimalDigit"]);
        assert_eq!(constraints_of(&violations, "tenantId"), vec![Constraint::Required]);
        assert_eq!(
            constraints_of(&violations, "currencyCode"),
            vec![Constraint::MaxLength { max: 5 }]
        );
        assert_eq!(
            constraints_of(&violations, "decimalDigit"),
            vec![Constraint::Type { expected: "string" }]
        );
    }

    #[test]
    fn each_required_field_is_enforced() {
        for name in ["tenantId", "currencyCode", "currencyName"] {
            let mut candidate = valid();
            candidate.as_object_mut().unwrap().remove(name);

            let violations = validate(&candidate).unwrap_err();
            assert_eq!(violations.len(), 1, "{name}");
            assert_eq!(violations[0].path, name);
            assert_eq!(violations[0].constraint, Constraint::Required);
        }
    }

    #[test]
    fn checks_bounds_enum_and_format() {
        let mut candidate = valid();
        let object = candidate.as_object_mut().unwrap();
        object.insert("currencyName".into(), json!(""));
        object.insert("createdBy".into(), json!("x".repeat(101)));
        object.insert("enabledFlag".into(), json!("yes"));
        object.insert("createdDate".into(), json!("yesterday"));
        object.insert("objVersion".into(), json!("1"));

        let violations = validate(&candidate).unwrap_err();
        assert_eq!(
            constraints_of(&violations, "currencyName"),
            vec![Constraint::MinLength { min: 1 }]
        );
        assert_eq!(
            constraints_of(&violations, "createdBy"),
            vec![Constraint::MaxLength { max: 100 }]
        );
        assert_eq!(
            constraints_of(&violations, "enabledFlag"),
            vec![Constraint::Enum {
                allowed: &["0", "1"]
            }]
        );
        assert_eq!(
            constraints_of(&violations, "createdDate"),
            vec![Constraint::Format {
                format: "date-time"
            }]
        );
        assert_eq!(
            constraints_of(&violations, "objVersion"),
            vec![Constraint::Type { expected: "number" }]
        );
    }

    #[test]
    fn counts_length_in_characters() {
        let mut candidate = valid();
        candidate["currencyCode"] = json!("₹₹₹₹₹");
        assert_eq!(validate(&candidate), Ok(()));
    }

    #[test]
    fn rejects_non_objects() {
        for candidate in [json!(null), json!([]), json!("INR")] {
            let violations = validate(&candidate).unwrap_err();
            assert_eq!(violations[0].constraint, Constraint::NotAnObject);
        }
    }

    #[test]
    fn obj_version_must_fit_a_signed_integer() {
        let mut candidate = valid();

        candidate["objVersion"] = json!(u64::MAX);
        let violations = validate(&candidate).unwrap_err();
        assert_eq!(
            constraints_of(&violations, "objVersion"),
            vec![Constraint::Maximum { max: i64::MAX }]
        );

        for accepted in [json!(i64::MAX), json!(-3), json!(1.5)] {
            candidate["objVersion"] = accepted;
            assert_eq!(validate(&candidate), Ok(()));
        }
    }

    #[test]
    fn violation_display_names_the_field() {
        let violations = validate(&json!({"currencyCode": "INR", "currencyName": "R"})).unwrap_err();
        assert_eq!(violations[0].to_string(), "tenantId: is required");
    }

    #[test]
    fn json_schema_mirrors_fields() {
        let document = schema::json_schema();

        assert_eq!(document["title"], "masterCurrencyModel");
        assert_eq!(
            document["required"],
            json!(["tenantId", "currencyCode", "currencyName"])
        );
        assert_eq!(document["properties"]["currencyCode"]["maxLength"], 5);
        assert_eq!(document["properties"]["currencyCode"]["unique"], true);
        assert_eq!(document["properties"]["enabledFlag"]["enum"], json!(["0", "1"]));
        assert_eq!(document["properties"]["createdDate"]["format"], "date-time");
        assert_eq!(document["properties"]["objVersion"]["type"], "number");
        assert_eq!(document["properties"]["objVersion"]["maximum"], i64::MAX);
        assert_eq!(
            document["properties"].as_object().unwrap().len(),
            schema::FIELDS.len()
        );
    }

    #[test]
    fn index_name_is_snake_case() {
        assert_eq!(
            schema::field("currencyCode").unwrap().index_name(),
            "currency_code"
        );
    }

    #[test]
    fn parses_store_identifiers() {
        let id: CurrencyId = "a1b2c3d4e5f6g7h8i9j0".parse().unwrap();
        assert_eq!(id.as_str(), "a1b2c3d4e5f6g7h8i9j0");

        for malformed in ["", "abc", "A1B2C3D4E5F6G7H8I9J0", "a1b2c3d4e5f6g7h8i9j0k", "a1b2c3d4e5f6g7h8i9-0"] {
            assert_eq!(
                malformed.parse::<CurrencyId>(),
                Err(MalformedIdentifier(malformed.to_owned()))
            );
        }
    }

    #[test]
    fn every_queryable_field_is_in_the_schema() {
        assert_eq!(CurrencyField::ALL.len(), schema::FIELDS.len());
        for field in CurrencyField::ALL {
            assert_eq!(field.spec().name, field.as_str());
            assert_eq!(field.as_str().parse::<CurrencyField>(), Ok(field));
        }

        assert_eq!(
            "_id".parse::<CurrencyField>(),
            Err(UnknownAttribute("_id".to_owned()))
        );
    }

    #[test]
    fn record_deserializes_from_validated_json() {
        let record: CurrencyRecord = serde_json::from_value(valid()).unwrap();
        assert_eq!(record.currency_code, "de894");
        assert_eq!(record.enabled_flag, Some(EnabledFlag::Enabled));
        assert_eq!(record.obj_version, Some(123.into()));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, valid());
    }

    #[test]
    fn stored_currency_is_flat() {
        let stored = StoredCurrency {
            id: "a1b2c3d4e5f6g7h8i9j0".parse().unwrap(),
            record: CurrencyRecord::new("t", "INR", "Rupee"),
        };

        assert_eq!(
            serde_json::to_value(&stored).unwrap(),
            json!({
                "id": "a1b2c3d4e5f6g7h8i9j0",
                "tenantId": "t",
                "currencyCode": "INR",
                "currencyName": "Rupee"
            })
        );
    }

    #[test]
    fn empty_lookup_serializes_as_empty_object() {
        let empty: Lookup<StoredCurrency> = None.into();
        assert!(empty.is_empty());
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));

        let found = Lookup::Found(CurrencyRecord::new("t", "INR", "Rupee"));
        assert_eq!(serde_json::to_value(&found).unwrap()["currencyCode"], "INR");
    }
}
