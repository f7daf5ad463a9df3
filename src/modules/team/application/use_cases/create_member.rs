use async_trait::async_trait;

use crate::modules::team::application::ports::outgoing::{
    NewTeamMemberData, TeamMemberView, TeamRepository, TeamRepositoryError,
};
use crate::shared::validation::{optional_text, required_text, Violations};

// ========================= Create Member Command =========================

pub(crate) fn specialties_list(
    v: &mut Violations,
    value: Option<Vec<String>>,
) -> Vec<String> {
    let items = value.unwrap_or_default();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let trimmed = item.trim().to_string();
        if trimmed.is_empty() {
            v.add("specialties", "specialties must not contain empty entries");
            return Vec::new();
        }
        out.push(trimmed);
    }
    out
}

#[derive(Debug, Clone)]
pub struct CreateMemberCommand {
    data: NewTeamMemberData,
}

impl CreateMemberCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        title: Option<String>,
        bio: Option<String>,
        image: Option<String>,
        specialties: Option<Vec<String>>,
        experience: Option<String>,
        order_index: Option<i32>,
        active: Option<bool>,
    ) -> Result<Self, Violations> {
        let mut v = Violations::new();

        let name = required_text(&mut v, "name", name, 100);
        let title = required_text(&mut v, "title", title, 150);
        let bio = required_text(&mut v, "bio", bio, 5000);
        let image = optional_text(&mut v, "image", image, 255);
        let specialties = specialties_list(&mut v, specialties);
        let experience = optional_text(&mut v, "experience", experience, 100);

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self {
            data: NewTeamMemberData {
                name,
                title,
                bio,
                image,
                specialties,
                experience,
                order_index: order_index.unwrap_or(0),
                active: active.unwrap_or(true),
            },
        })
    }

    pub fn data(&self) -> &NewTeamMemberData {
        &self.data
    }
}

// ========================= Create Member Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateMemberError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateMemberUseCase: Send + Sync {
    async fn execute(&self, command: CreateMemberCommand)
        -> Result<TeamMemberView, CreateMemberError>;
}

#[derive(Debug, Clone)]
pub struct CreateMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateMemberUseCase for CreateMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateMemberCommand,
    ) -> Result<TeamMemberView, CreateMemberError> {
        self.repository
            .create(command.data().clone())
            .await
            .map_err(|e| CreateMemberError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    pub(crate) fn sample_view(name: &str, active: bool) -> TeamMemberView {
        TeamMemberView {
            id: Uuid::new_v4(),
            name: name.to_string(),
            title: "Senior Partner".to_string(),
            bio: "Twenty years in commercial litigation".to_string(),
            image: None,
            specialties: vec!["Litigation".to_string()],
            experience: Some("20 years".to_string()),
            order_index: 1,
            active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn valid_command() -> CreateMemberCommand {
        CreateMemberCommand::new(
            Some("Jane Doe".to_string()),
            Some("Senior Partner".to_string()),
            Some("Twenty years in commercial litigation".to_string()),
            None,
            Some(vec!["Litigation".to_string()]),
            Some("20 years".to_string()),
            Some(1),
            None,
        )
        .unwrap()
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let result = CreateMemberCommand::new(None, None, None, None, None, None, None, None);
        assert_eq!(result.unwrap_err().fields(), vec!["name", "title", "bio"]);
    }

    #[test]
    fn empty_specialty_is_a_violation() {
        let result = CreateMemberCommand::new(
            Some("Jane".to_string()),
            Some("Partner".to_string()),
            Some("Bio".to_string()),
            None,
            Some(vec!["".to_string()]),
            None,
            None,
            None,
        );
        assert_eq!(result.unwrap_err().fields(), vec!["specialties"]);
    }

    #[test]
    fn active_defaults_to_true() {
        assert!(valid_command().data().active);
    }

    struct MockTeamRepository {
        result: Result<TeamMemberView, TeamRepositoryError>,
    }

    #[async_trait]
    impl TeamRepository for MockTeamRepository {
        async fn create(
            &self,
            _data: NewTeamMemberData,
        ) -> Result<TeamMemberView, TeamRepositoryError> {
            self.result.clone()
        }

        async fn update(
            &self,
            _id: Uuid,
            _patch: crate::modules::team::application::ports::outgoing::TeamMemberPatch,
        ) -> Result<TeamMemberView, TeamRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), TeamRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn create_success_returns_row() {
        let view = sample_view("Jane Doe", true);
        let use_case = CreateMemberUseCase::new(MockTeamRepository {
            result: Ok(view.clone()),
        });

        let created = use_case.execute(valid_command()).await.unwrap();
        assert_eq!(created.name, "Jane Doe");
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let use_case = CreateMemberUseCase::new(MockTeamRepository {
            result: Err(TeamRepositoryError::DatabaseError("down".to_string())),
        });

        let result = use_case.execute(valid_command()).await;
        assert!(matches!(result, Err(CreateMemberError::RepositoryError(_))));
    }
}
