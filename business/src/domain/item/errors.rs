use super::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.not_found")]
    NotFound,
    #[error("item.validation_failed")]
    Validation(ValidationErrors),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
