//! Filtered, optionally windowed reads shared by every repository.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QuerySelect, Select};

use crate::shared::{Listing, PageRequest, PaginatedResult};

/// Run `select` as a listing. Without a page window the whole filtered set
/// comes back unwrapped; with one, `total` is counted on the same filter
/// before offset and limit are applied.
pub async fn fetch_listing<C, E>(
    conn: &C,
    select: Select<E>,
    page: PageRequest,
) -> Result<Listing<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let Some(window) = page.window() else {
        return Ok(Listing::All(select.all(conn).await?));
    };

    let total = select.clone().count(conn).await?;
    let items = select
        .offset(window.offset())
        .limit(window.page_size)
        .all(conn)
        .await?;
    Ok(Listing::Page(PaginatedResult { items, total }))
}

/// Keyword filters compare exactly; blank keywords are ignored.
pub fn keyword(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|k| !k.is_empty())
}
