use crate::models::{author, book, book_authors, book_categories, category};
use sea_orm::*;

/// (name, publication_date, availability_status, author, categories)
const DEMO_BOOKS: &[(&str, &str, &str, &str, &[&str])] = &[
    ("Dune", "1965-08-01", "Available", "Frank Herbert", &["Science Fiction", "Classics"]),
    ("Children of Dune", "1976-04-01", "Borrowed", "Frank Herbert", &["Science Fiction"]),
    ("The Left Hand of Darkness", "1969-03-01", "Available", "Ursula K. Le Guin", &["Science Fiction"]),
    ("A Wizard of Earthsea", "1968-11-01", "Available", "Ursula K. Le Guin", &["Fantasy"]),
    ("The Hobbit", "1937-09-21", "Available", "J.R.R. Tolkien", &["Fantasy", "Classics"]),
    ("Pride and Prejudice", "1813-01-28", "Sold Out", "Jane Austen", &["Classics"]),
    ("Murder on the Orient Express", "1934-01-01", "Available", "Agatha Christie", &["Mystery"]),
];

/// Seed a small demo catalog. Does nothing when books already exist.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if book::Entity::find().count(db).await? > 0 {
        tracing::info!("Catalog already populated, skipping demo seed");
        return Ok(());
    }

    let txn = db.begin().await?;

    for (name, date, status, author_name, categories) in DEMO_BOOKS {
        let saved_book = book::ActiveModel {
            name: Set(name.to_string()),
            publication_date: Set(Some(date.to_string())),
            availability_status: Set(status.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let author = find_or_create_author(&txn, author_name).await?;
        book_authors::ActiveModel {
            book_id: Set(saved_book.id),
            author_id: Set(author.id),
        }
        .insert(&txn)
        .await?;

        for category_name in categories.iter() {
            let category = find_or_create_category(&txn, category_name).await?;
            book_categories::ActiveModel {
                book_id: Set(saved_book.id),
                category_id: Set(category.id),
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;
    tracing::info!("Seeded {} demo books", DEMO_BOOKS.len());
    Ok(())
}

async fn find_or_create_author<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<author::Model, DbErr> {
    match author::Entity::find()
        .filter(author::Column::Name.eq(name))
        .one(db)
        .await?
    {
        Some(existing) => Ok(existing),
        None => {
            author::ActiveModel {
                name: Set(name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await
        }
    }
}

async fn find_or_create_category<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<category::Model, DbErr> {
    match category::Entity::find()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await?
    {
        Some(existing) => Ok(existing),
        None => {
            category::ActiveModel {
                name: Set(name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await
        }
    }
}
