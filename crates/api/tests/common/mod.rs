use api::gql::{build_schema, BookshelfSchema, SchemaOptions};
use api::AppState;
use async_graphql::{Request, Variables};
use async_trait::async_trait;
use infra::error::StoreResult;
use infra::models::{BookRow, HasReadRow, UserRow};
use infra::{BookFilter, Fixture, MemoryStore, Store, StoreError};

fn user(id: &str, username: &str, role: Option<&str>) -> UserRow {
    UserRow {
        id: id.to_string(),
        username: Some(username.to_string()),
        role: role.map(str::to_string),
    }
}

fn book(id: &str, title: &str, author: &str, fiction: Option<bool>, year: i32) -> BookRow {
    BookRow {
        id: id.to_string(),
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        fiction,
        published_year: Some(year),
    }
}

fn read(user_id: &str, book_id: &str, rating: i32) -> HasReadRow {
    HasReadRow {
        user_id: user_id.to_string(),
        book_id: book_id.to_string(),
        rating: Some(rating),
    }
}

/// Small catalog shared by the query tests.
///
/// - `u1` (admin) rated Dune 4 and Sapiens 5
/// - `u2` (role `Admin`, not an admin) rated Neuromancer 2 and Dune 3
/// - `u3` (no role) has read nothing
/// - `u4` rated a book that does not exist
#[allow(dead_code)]
pub fn sample_fixture() -> Fixture {
    Fixture {
        users: vec![
            user("u1", "ada", Some("admin")),
            user("u2", "bob", Some("Admin")),
            user("u3", "cleo", None),
            user("u4", "dan", Some("reader")),
        ],
        books: vec![
            book("1", "Dune", "Frank Herbert", Some(true), 1965),
            book("2", "Sapiens", "Yuval Noah Harari", Some(false), 2011),
            book("3", "Neuromancer", "William Gibson", Some(true), 1984),
            book("4", "Field Notes", "Anonymous", None, 1999),
        ],
        has_read: vec![
            read("u1", "1", 4),
            read("u1", "2", 5),
            read("u2", "3", 2),
            read("u2", "1", 3),
            read("u4", "404", 3),
        ],
    }
}

#[allow(dead_code)]
pub fn setup_schema(options: SchemaOptions) -> BookshelfSchema {
    let state = AppState::new(MemoryStore::new(sample_fixture()));
    build_schema(state, options)
}

/// Helper function to execute GraphQL queries
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &BookshelfSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Run a query that must succeed and return its data as JSON.
#[allow(dead_code)]
pub async fn query_json(schema: &BookshelfSchema, query: &str) -> serde_json::Value {
    let response = execute_graphql(schema, query, None).await;
    assert!(
        response.errors.is_empty(),
        "GraphQL errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Serves one user (`u1`, who rated book `1`) and fails everything that touches
/// books, ratings or the health check. With `reads_available: false` the
/// `hasRead` lookup fails too.
#[allow(dead_code)]
pub struct FlakyStore {
    pub reads_available: bool,
}

fn refused() -> StoreError {
    StoreError::Io(std::io::Error::other("connection refused by 10.0.0.7"))
}

#[async_trait]
impl Store for FlakyStore {
    async fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        Ok(vec![user("u1", "ada", Some("admin"))])
    }

    async fn list_books(&self, _filter: BookFilter) -> StoreResult<Vec<BookRow>> {
        Err(refused())
    }

    async fn get_book(&self, _id: &str) -> StoreResult<Option<BookRow>> {
        Err(refused())
    }

    async fn get_books(&self, _ids: &[String]) -> StoreResult<Vec<BookRow>> {
        Err(refused())
    }

    async fn list_has_read_for_user(&self, user_id: &str) -> StoreResult<Vec<HasReadRow>> {
        if !self.reads_available {
            return Err(refused());
        }
        Ok(vec![read(user_id, "1", 4)])
    }

    async fn avg_rating_for_user(&self, _user_id: &str) -> StoreResult<Option<f64>> {
        Err(refused())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(refused())
    }
}
