//! Access Management Commands
//!
//! Roles, modules and invites come from three separate endpoints.

use superclient_core::api::{self, InvitesResponse, ModulesResponse, RolesResponse};
use superclient_core::ApiError;

use super::get_json;
use crate::context::AppContext;
use crate::models::{Invite, Module, Role};

pub async fn list_roles(ctx: AppContext) -> Result<Vec<Role>, ApiError> {
    let response: RolesResponse = get_json(ctx, api::ACCESS_ROLES).await?;
    Ok(response.roles)
}

pub async fn list_modules(ctx: AppContext) -> Result<Vec<Module>, ApiError> {
    let response: ModulesResponse = get_json(ctx, api::ACCESS_MODULES).await?;
    Ok(response.modules)
}

pub async fn list_invites(ctx: AppContext) -> Result<Vec<Invite>, ApiError> {
    let response: InvitesResponse = get_json(ctx, api::ACCESS_INVITES).await?;
    Ok(response.invites)
}
