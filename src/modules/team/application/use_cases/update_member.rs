use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::team::application::ports::outgoing::{
    TeamMemberPatch, TeamMemberView, TeamRepository, TeamRepositoryError,
};
use crate::shared::validation::Violations;

use super::create_member::specialties_list;

// ========================= Update Member Command =========================

#[derive(Debug, Clone)]
pub struct UpdateMemberCommand {
    id: Uuid,
    patch: TeamMemberPatch,
}

fn patch_text(
    v: &mut Violations,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim().to_string();
    if trimmed.is_empty() {
        v.add(field, &format!("{field} must not be empty"));
        return None;
    }
    if trimmed.chars().count() > max_len {
        v.add(field, &format!("{field} must be at most {max_len} characters"));
        return None;
    }
    Some(trimmed)
}

impl UpdateMemberCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
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

        let specialties = specialties.map(|s| specialties_list(&mut v, Some(s)));

        let patch = TeamMemberPatch {
            name: patch_text(&mut v, "name", name, 100),
            title: patch_text(&mut v, "title", title, 150),
            bio: patch_text(&mut v, "bio", bio, 5000),
            image: patch_text(&mut v, "image", image, 255),
            specialties,
            experience: patch_text(&mut v, "experience", experience, 100),
            order_index,
            active,
        };

        if !v.is_empty() {
            return Err(v);
        }

        Ok(Self { id, patch })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn patch(&self) -> &TeamMemberPatch {
        &self.patch
    }
}

// ========================= Update Member Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateMemberError {
    #[error("Team member not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateMemberUseCase: Send + Sync {
    async fn execute(&self, command: UpdateMemberCommand)
        -> Result<TeamMemberView, UpdateMemberError>;
}

#[derive(Debug, Clone)]
pub struct UpdateMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateMemberUseCase for UpdateMemberUseCase<R>
where
    R: TeamRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateMemberCommand,
    ) -> Result<TeamMemberView, UpdateMemberError> {
        self.repository
            .update(command.id(), command.patch().clone())
            .await
            .map_err(|e| match e {
                TeamRepositoryError::NotFound => UpdateMemberError::NotFound,
                other => UpdateMemberError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::team::application::ports::outgoing::NewTeamMemberData;
    use crate::modules::team::application::use_cases::create_member::tests::sample_view;

    fn command_with(name: Option<String>, active: Option<bool>) -> Result<UpdateMemberCommand, Violations> {
        UpdateMemberCommand::new(Uuid::new_v4(), name, None, None, None, None, None, None, active)
    }

    #[test]
    fn absent_fields_stay_out_of_the_patch() {
        let command = command_with(None, Some(false)).unwrap();
        assert!(command.patch().name.is_none());
        assert_eq!(command.patch().active, Some(false));
    }

    #[test]
    fn present_but_empty_name_is_a_violation() {
        let result = command_with(Some("  ".to_string()), None);
        assert_eq!(result.unwrap_err().fields(), vec!["name"]);
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
            unimplemented!()
        }

        async fn update(
            &self,
            _id: Uuid,
            _patch: TeamMemberPatch,
        ) -> Result<TeamMemberView, TeamRepositoryError> {
            self.result.clone()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), TeamRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn update_of_missing_row_maps_to_not_found() {
        let use_case = UpdateMemberUseCase::new(MockTeamRepository {
            result: Err(TeamRepositoryError::NotFound),
        });
        let command = command_with(Some("Jane".to_string()), None).unwrap();

        let result = use_case.execute(command).await;
        assert!(matches!(result, Err(UpdateMemberError::NotFound)));
    }

    #[tokio::test]
    async fn successful_update_returns_the_row() {
        let view = sample_view("Jane Doe", false);
        let use_case = UpdateMemberUseCase::new(MockTeamRepository {
            result: Ok(view.clone()),
        });
        let command = command_with(None, Some(false)).unwrap();

        let updated = use_case.execute(command).await.unwrap();
        assert!(!updated.active);
    }
}
