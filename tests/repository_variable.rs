use campus_variables::domain::entities::NewVariable;
use campus_variables::domain::repositories::VariableRepository;
use campus_variables::error::AppError;
use campus_variables::infrastructure::persistence::PgVariableRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_variable(name: &str, value: &str) -> NewVariable {
    NewVariable {
        name: name.to_string(),
        value: value.to_string(),
        description: None,
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_create_variable(pool: PgPool) {
    let repo = PgVariableRepository::new(Arc::new(pool));

    let variable = repo
        .create(NewVariable {
            name: "aforo_maximo".to_string(),
            value: "120".to_string(),
            description: Some("Aforo del auditorio".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(variable.name, "aforo_maximo");
    assert_eq!(variable.value, "120");
    assert_eq!(variable.description.as_deref(), Some("Aforo del auditorio"));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_list_empty(pool: PgPool) {
    let repo = PgVariableRepository::new(Arc::new(pool));

    let variables = repo.list().await.unwrap();

    assert!(variables.is_empty());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_list_ordered_by_name(pool: PgPool) {
    let repo = PgVariableRepository::new(Arc::new(pool));

    repo.create(new_variable("zona_horaria", "America/Bogota"))
        .await
        .unwrap();
    repo.create(new_variable("aforo_maximo", "120")).await.unwrap();
    repo.create(new_variable("horario_apertura", "07:00"))
        .await
        .unwrap();

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.name)
        .collect();

    assert_eq!(names, ["aforo_maximo", "horario_apertura", "zona_horaria"]);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_duplicate_name_is_conflict(pool: PgPool) {
    let repo = PgVariableRepository::new(Arc::new(pool));

    repo.create(new_variable("aforo_maximo", "120")).await.unwrap();
    let result = repo.create(new_variable("aforo_maximo", "90")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_count(pool: PgPool) {
    let repo = PgVariableRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 0);

    repo.create(new_variable("aforo_maximo", "120")).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
}
