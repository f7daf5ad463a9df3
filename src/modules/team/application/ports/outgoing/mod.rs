pub mod team_query;
pub mod team_repository;

pub use team_query::{TeamListFilter, TeamMemberView, TeamQuery, TeamQueryError, TeamSort};
pub use team_repository::{
    NewTeamMemberData, TeamMemberPatch, TeamRepository, TeamRepositoryError,
};
