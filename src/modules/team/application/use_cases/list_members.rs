use async_trait::async_trait;

use crate::modules::team::application::ports::outgoing::{
    TeamListFilter, TeamMemberView, TeamQuery, TeamSort,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ========================= List Members Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMembersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListMembersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TeamListFilter,
        sort: TeamSort,
        page: PageRequest,
    ) -> Result<PageResult<TeamMemberView>, ListMembersError>;
}

#[derive(Debug, Clone)]
pub struct ListMembersUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListMembersUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListMembersUseCase for ListMembersUseCase<Q>
where
    Q: TeamQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: TeamListFilter,
        sort: TeamSort,
        page: PageRequest,
    ) -> Result<PageResult<TeamMemberView>, ListMembersError> {
        self.query
            .list(filter, sort, page)
            .await
            .map_err(|e| ListMembersError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::team::application::ports::outgoing::TeamQueryError;
    use crate::modules::team::application::use_cases::create_member::tests::sample_view;
    use uuid::Uuid;

    struct MockTeamQuery;

    #[async_trait]
    impl TeamQuery for MockTeamQuery {
        async fn list(
            &self,
            filter: TeamListFilter,
            _sort: TeamSort,
            page: PageRequest,
        ) -> Result<PageResult<TeamMemberView>, TeamQueryError> {
            let rows = if filter.active == Some(true) {
                vec![sample_view("Jane Doe", true)]
            } else {
                vec![sample_view("Jane Doe", true), sample_view("John Roe", false)]
            };
            Ok(PageResult {
                total: rows.len() as u64,
                items: rows,
                page: page.page(),
                per_page: page.per_page(),
            })
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<TeamMemberView, TeamQueryError> {
            unimplemented!()
        }

        async fn active(&self) -> Result<Vec<TeamMemberView>, TeamQueryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn active_filter_narrows_the_page() {
        let use_case = ListMembersUseCase::new(MockTeamQuery);

        let all = use_case
            .execute(
                TeamListFilter::default(),
                TeamSort::default(),
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert_eq!(all.total, 2);

        let active_only = use_case
            .execute(
                TeamListFilter {
                    active: Some(true),
                    search: None,
                },
                TeamSort::default(),
                PageRequest::default(),
            )
            .await
            .unwrap();
        assert_eq!(active_only.total, 1);
    }
}
