use tera::Context;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub async fn context(state: &AppState) -> Result<Context, DomainError> {
    let books = state.book_repo.find_all().await?;

    let mut context = Context::new();
    context.insert("books", &books);
    Ok(context)
}
