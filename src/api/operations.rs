use tera::Context;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

/// Report of every logged Buy and Borrow with its book name
pub async fn context(state: &AppState) -> Result<Context, DomainError> {
    let operations = state.operation_repo.find_all().await?;

    let mut context = Context::new();
    context.insert("operations", &operations);
    Ok(context)
}
