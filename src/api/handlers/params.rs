//! Path parameters shared by both route layouts.
//!
//! Extra captures such as `{version}` in the nested layout are ignored.

use serde::Deserialize;
use tracing::warn;

use crate::api::errors::ApiError;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::ResourcePath;

#[derive(Debug, Deserialize)]
pub struct AccountParams {
    pub account: String,
}

#[derive(Debug, Deserialize)]
pub struct ContainerParams {
    pub account: String,
    pub container: String,
}

#[derive(Debug, Deserialize)]
pub struct ObjectParams {
    pub account: String,
    pub container: String,
    /// `{bucket}` in the nested layout
    #[serde(alias = "bucket")]
    pub object: String,
}

impl TryFrom<AccountParams> for ResourcePath {
    type Error = DomainError;

    fn try_from(params: AccountParams) -> Result<Self, Self::Error> {
        ResourcePath::account(&params.account)
    }
}

impl TryFrom<ContainerParams> for ResourcePath {
    type Error = DomainError;

    fn try_from(params: ContainerParams) -> Result<Self, Self::Error> {
        ResourcePath::container(&params.account, &params.container)
    }
}

impl TryFrom<ObjectParams> for ResourcePath {
    type Error = DomainError;

    fn try_from(params: ObjectParams) -> Result<Self, Self::Error> {
        ResourcePath::object(&params.account, &params.container, &params.object)
    }
}

/// Validate extracted parameters, rejecting bad segments with 400
pub fn resolve<P>(params: P) -> Result<ResourcePath, ApiError>
where
    P: TryInto<ResourcePath, Error = DomainError> + std::fmt::Debug,
{
    let repr = format!("{:?}", params);
    params.try_into().map_err(|e| {
        warn!(params = %repr, error = %e, "Rejected path parameters");
        ApiError::from(e)
    })
}
