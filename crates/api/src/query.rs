//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size when `limit` is omitted.
pub const DEFAULT_LIMIT: i64 = 50;
/// Largest page a client may ask for.
pub const MAX_LIMIT: i64 = 500;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// `limit` clamped to `1..=MAX_LIMIT`.
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as usize
    }

    /// `offset`, negative values treated as zero.
    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0).max(0) as usize
    }
}

/// `GET /sandwich-collections?host=&limit=&offset=`.
#[derive(Debug, Default, Deserialize)]
pub struct CollectionListParams {
    pub host: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl CollectionListParams {
    /// Whether the client asked for a page rather than everything.
    pub fn is_paged(&self) -> bool {
        self.limit.is_some() || self.offset.is_some()
    }

    pub fn page(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// `GET /messages?committee=`.
#[derive(Debug, Default, Deserialize)]
pub struct MessageListParams {
    pub committee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        let params = PaginationParams {
            limit: Some(10_000),
            offset: Some(-4),
        };
        assert_eq!(params.limit(), MAX_LIMIT as usize);
        assert_eq!(params.offset(), 0);
        assert_eq!(PaginationParams::default().limit(), DEFAULT_LIMIT as usize);
        assert_eq!(
            PaginationParams {
                limit: Some(0),
                offset: None
            }
            .limit(),
            1
        );
    }
}
