//! Finance Commands

use superclient_core::api::{self, FinanceData, FinanceDataResponse};
use superclient_core::ApiError;

use super::get_json;
use crate::context::AppContext;

pub async fn load_finance_data(ctx: AppContext) -> Result<FinanceData, ApiError> {
    let response: FinanceDataResponse = get_json(ctx, api::FINANCE_DATA).await?;
    Ok(response.into_data())
}
