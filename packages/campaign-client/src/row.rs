use cosmwasm_std::{CustomQuery, QuerierWrapper, StdResult, Uint128};
use cw_campaign::{state::Request, CampaignContract};

/// Decimal places between the base denom and the displayed unit.
pub const DEFAULT_DECIMALS: u32 = 6;

/// Page size used while loading every request of a campaign.
const PAGE_SIZE: u32 = 30;

/// One row of a campaign's requests table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestRow {
    pub id: u64,
    pub description: String,
    /// The request value in whole units.
    pub value: String,
    pub recipient: String,
    /// `"{approval_count} / {approvers_count}"`
    pub approvals: String,
    pub complete: bool,
    pub ready_to_finalize: bool,
    /// Finalized rows are greyed out.
    pub disabled: bool,
    /// Open rows with enough approvals are highlighted.
    pub positive: bool,
}

impl RequestRow {
    pub fn new(id: u64, request: &Request, approvers_count: u64) -> Self {
        Self::with_decimals(id, request, approvers_count, DEFAULT_DECIMALS)
    }

    pub fn with_decimals(id: u64, request: &Request, approvers_count: u64, decimals: u32) -> Self {
        let ready_to_finalize = request.has_majority(approvers_count);
        Self {
            id,
            description: request.description.clone(),
            value: display_value(request.value, decimals),
            recipient: request.recipient.to_string(),
            approvals: format!("{} / {}", request.approval_count, approvers_count),
            complete: request.complete,
            ready_to_finalize,
            disabled: request.complete,
            positive: ready_to_finalize && !request.complete,
        }
    }

    /// Whether the approve and finalize buttons are shown.
    pub fn show_actions(&self) -> bool {
        !self.complete
    }
}

fn display_value(value: Uint128, decimals: u32) -> String {
    let atomics = value.u128();
    let width = decimals as usize;
    match 10u128.checked_pow(decimals) {
        Some(scale) => with_fraction(
            (atomics / scale).to_string(),
            format!("{:0>width$}", atomics % scale),
        ),
        // Every u128 is below 10^decimals.
        None => with_fraction("0".to_string(), format!("{atomics:0>width$}")),
    }
}

fn with_fraction(whole: String, fraction: String) -> String {
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Loads every request of `campaign` as table rows, in creation order.
pub fn load_request_rows<C: CustomQuery>(
    querier: &QuerierWrapper<C>,
    campaign: &CampaignContract,
) -> StdResult<Vec<RequestRow>> {
    let approvers_count = campaign.approvers_count(querier)?;

    let mut rows = vec![];
    let mut start_after = None;
    loop {
        let page = campaign.requests(querier, start_after, Some(PAGE_SIZE))?;
        let Some(last) = page.last() else {
            break;
        };
        start_after = Some(last.id);
        let done = page.len() < PAGE_SIZE as usize;
        rows.extend(
            page.iter()
                .map(|r| RequestRow::new(r.id, &r.request, approvers_count)),
        );
        if done {
            break;
        }
    }
    Ok(rows)
}
