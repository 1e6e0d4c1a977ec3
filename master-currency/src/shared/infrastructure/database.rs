use crate::backoffice::currencies::domain::schema::{self, FieldKind, FieldSpec};

use super::config::Config;

pub use surrealdb::Result;

/// Engine picked at runtime from the connection string scheme.
pub type Engine = surrealdb::engine::any::Any;

pub type Connection = surrealdb::Surreal<Engine>;

pub type Error = surrealdb::Error;

async fn init(connection: &Connection) -> Result<()> {
    let mut query = connection.query(format!("DEFINE TABLE {} SCHEMAFULL", schema::TABLE));
    for statement in definitions() {
        query = query.query(statement);
    }

    query.await?.check()?;
    Ok(())
}

/// Storage constraints derived from the canonical field table.
pub(crate) fn definitions() -> Vec<String> {
    let mut statements: Vec<String> = schema::FIELDS.iter().map(define_field).collect();

    statements.extend(schema::FIELDS.iter().filter(|f| f.unique).map(|field| {
        format!(
            "DEFINE INDEX {table}_{index} ON {table} FIELDS {field} UNIQUE",
            table = schema::TABLE,
            index = field.index_name(),
            field = field.name,
        )
    }));

    statements
}

fn define_field(field: &FieldSpec) -> String {
    let base = match field.kind {
        FieldKind::String | FieldKind::DateTime => "string",
        FieldKind::Number => "number",
    };

    let ty = if field.required {
        base.to_owned()
    } else {
        format!("option<{base}>")
    };

    let mut checks = Vec::new();
    if let Some(min) = field.min_length {
        checks.push(format!("string::len($value) >= {min}"));
    }
    if let Some(max) = field.max_length {
        checks.push(format!("string::len($value) <= {max}"));
    }
    if !field.allowed.is_empty() {
        let allowed = field
            .allowed
            .iter()
            .map(|value| format!("{value:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        checks.push(format!("$value INSIDE [{allowed}]"));
    }

    let mut statement = format!(
        "DEFINE FIELD {} ON {} TYPE {}",
        field.name,
        schema::TABLE,
        ty
    );

    if !checks.is_empty() {
        let checks = checks.join(" AND ");
        if field.required {
            statement.push_str(&format!(" ASSERT {checks}"));
        } else {
            statement.push_str(&format!(" ASSERT $value = NONE OR ({checks})"));
        }
    }

    statement
}

pub async fn connect(config: &Config) -> Result<Connection> {
    let db = surrealdb::engine::any::connect(config.db_url.as_str()).await?;

    if let Some(credentials) = &config.credentials {
        db.signin(surrealdb::opt::auth::Root {
            username: &credentials.username,
            password: &credentials.password,
        })
        .await?;
    }

    db.use_ns(config.namespace.as_str())
        .use_db(config.database.as_str())
        .await?;

    init(&db).await?;
    log::debug!(
        "connected to {} ({}/{})",
        config.db_url,
        config.namespace,
        config.database
    );

    Ok(db)
}
