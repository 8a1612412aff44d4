//! Pipeline Commands

use superclient_core::api::{self, PipelineBoardResponse};
use superclient_core::ApiError;

use super::get_json;
use crate::context::AppContext;
use crate::models::Column;

/// Board columns in stage order
pub async fn load_pipeline_board(ctx: AppContext) -> Result<Vec<Column>, ApiError> {
    let response: PipelineBoardResponse = get_json(ctx, api::PIPELINE_BOARD).await?;
    Ok(response.into_columns())
}
