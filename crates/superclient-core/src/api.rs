//! Backend API Contract
//!
//! Endpoint paths and the response envelopes the dashboard reads. The HTTP
//! transport itself lives in the UI crate.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{Category, Column, Expense, Invite, Module, Role};
use crate::error::ApiError;

pub const PIPELINE_BOARD: &str = "/api/pipeline/board";
pub const FINANCE_DATA: &str = "/api/finance/data";
pub const ACCESS_ROLES: &str = "/api/access/roles";
pub const ACCESS_MODULES: &str = "/api/access/modules";
pub const ACCESS_INVITES: &str = "/api/access/invites";

/// `Authorization` header value for a session token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Decode a JSON body into an envelope
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// `GET /api/pipeline/board`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineBoardResponse {
    #[serde(default)]
    pub pipeline: Option<PipelineBoard>,
}

/// The board comes either as a bare column list or wrapped in an object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PipelineBoard {
    Columns(Vec<Column>),
    Board {
        #[serde(default)]
        columns: Vec<Column>,
    },
}

impl PipelineBoardResponse {
    pub fn into_columns(self) -> Vec<Column> {
        match self.pipeline {
            Some(PipelineBoard::Columns(columns)) | Some(PipelineBoard::Board { columns }) => columns,
            None => Vec::new(),
        }
    }
}

/// `GET /api/finance/data`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinanceDataResponse {
    #[serde(default)]
    pub data: Option<FinanceData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinanceData {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl FinanceDataResponse {
    pub fn into_data(self) -> FinanceData {
        self.data.unwrap_or_default()
    }
}

/// `GET /api/access/roles`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolesResponse {
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// `GET /api/access/modules`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModulesResponse {
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// `GET /api/access/invites`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvitesResponse {
    #[serde(default)]
    pub invites: Vec<Invite>,
}
