//! The vigência edit session: debounced resolution, scoped recomputation,
//! and aggregate consistency.

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{aggregate, compute, resolve_working_days};
use crate::config::{ConfigLookup, CostConfiguration};
use crate::models::{BenefitSet, ContractTypeId, DerivedField, VigenciaRecord};

use super::tracker::OverrideTracker;

/// Default debounce applied between an identity-field edit and the
/// configuration lookup it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Token identifying one in-flight refresh.
///
/// Issued when a refresh starts and compared when its result arrives; a
/// ticket issued before any later edit or refresh is stale, and its result is
/// discarded instead of applied. This guards against out-of-order application
/// of lookup responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    token: u64,
}

/// One vigência editing session.
///
/// Owns the record being edited, the derivation tracker, and a configuration
/// lookup handle. Edits to salary, date, contract type, working days, or
/// contracted hours schedule a debounced refresh; aggregates are recomputed
/// after every mutation so `monthly_total_cost == daily_total_cost *
/// working_days` holds at any save point.
///
/// # Example
///
/// ```no_run
/// use vigencia_engine::config::ConfigLoader;
/// use vigencia_engine::models::ContractTypeId;
/// use vigencia_engine::session::EditSession;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// # async fn example() -> Result<(), vigencia_engine::error::EngineError> {
/// let loader = ConfigLoader::load("./config/cost")?;
/// let mut session = EditSession::new(loader.config().clone());
/// session.set_effective_date(NaiveDate::from_ymd_opt(2024, 3, 15));
/// session.set_contract_type(Some(ContractTypeId(1)));
/// session.set_monthly_salary(Decimal::from_str("3000.00").unwrap());
/// session.refresh().await;
/// println!("daily total: {}", session.record().daily_total_cost);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EditSession<S: ConfigLookup> {
    lookup: S,
    record: VigenciaRecord,
    tracker: OverrideTracker,
    debounce: Duration,
    seq: u64,
    last_config: Option<CostConfiguration>,
}

impl<S: ConfigLookup> EditSession<S> {
    /// Creates a session with an empty record and the default debounce.
    pub fn new(lookup: S) -> Self {
        Self::with_debounce(lookup, DEFAULT_DEBOUNCE)
    }

    /// Creates a session with a custom debounce interval.
    pub fn with_debounce(lookup: S, debounce: Duration) -> Self {
        Self {
            lookup,
            record: VigenciaRecord::new(),
            tracker: OverrideTracker::new(),
            debounce,
            seq: 0,
            last_config: None,
        }
    }

    /// The record in its current state. Aggregates are always current.
    pub fn record(&self) -> &VigenciaRecord {
        &self.record
    }

    /// The session's derivation tracker.
    pub fn tracker(&self) -> &OverrideTracker {
        &self.tracker
    }

    /// The working-days divisor in effect for this record.
    pub fn effective_working_days(&self) -> u32 {
        resolve_working_days(
            self.record.working_days,
            self.last_config
                .as_ref()
                .and_then(|c| c.working_days_per_month),
        )
    }

    /// Replaces the session state with a record loaded from persistence.
    ///
    /// Field values are taken verbatim; aggregates are recomputed. The
    /// tracker is cleared so persisted values are never mistaken for stale
    /// derivations, and any in-flight refresh is invalidated.
    pub fn load(&mut self, record: VigenciaRecord) {
        self.invalidate();
        self.tracker.clear();
        self.last_config = None;
        self.record = record;
        self.reaggregate();
    }

    /// Sets the gross monthly salary. Triggers a refresh on next await.
    pub fn set_monthly_salary(&mut self, salary: Decimal) {
        self.invalidate();
        self.record.monthly_salary = salary;
        self.reaggregate();
    }

    /// Sets the vigência effective date.
    pub fn set_effective_date(&mut self, date: Option<NaiveDate>) {
        self.invalidate();
        self.record.effective_date = date;
    }

    /// Sets the contract type.
    pub fn set_contract_type(&mut self, contract_type: Option<ContractTypeId>) {
        self.invalidate();
        self.record.contract_type = contract_type;
    }

    /// Sets the per-record working-days override.
    pub fn set_working_days(&mut self, working_days: Option<u32>) {
        self.invalidate();
        self.record.working_days = working_days;
        self.reaggregate();
    }

    /// Sets the contracted hours per day.
    pub fn set_daily_contracted_hours(&mut self, hours: Option<Decimal>) {
        self.invalidate();
        self.record.daily_contracted_hours = hours;
    }

    /// Sets the manual-only daily cost allowance.
    pub fn set_cost_allowance(&mut self, amount: Decimal) {
        self.record.cost_allowance_daily = amount;
        self.reaggregate();
    }

    /// Records a manual edit to a benefit field; the field stops being
    /// overwritten by automatic recomputes.
    pub fn set_benefit_manual(&mut self, field: DerivedField, amount: Decimal) {
        self.tracker.mark_user_edited(field);
        self.record.set_benefit(field, amount);
        self.reaggregate();
    }

    /// Issues a ticket for a refresh starting now.
    ///
    /// Any previously issued ticket becomes stale. Use together with
    /// [`apply_refresh`](Self::apply_refresh) when driving the lookup
    /// externally; [`refresh`](Self::refresh) combines both with the
    /// debounce.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.seq += 1;
        RefreshTicket { token: self.seq }
    }

    /// Applies a resolved configuration to the record.
    ///
    /// Returns `false` without touching the record when the ticket was
    /// superseded by a later edit or refresh. Otherwise recomputes benefits
    /// and overwrites the auto-writable fields, marking them derived.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        config: Option<CostConfiguration>,
    ) -> bool {
        if ticket.token != self.seq {
            debug!(
                stale_token = ticket.token,
                current_token = self.seq,
                "Discarding superseded configuration lookup result"
            );
            return false;
        }

        self.last_config = config;
        let benefits = self.compute_benefits();
        let writable: Vec<DerivedField> = DerivedField::ALL
            .into_iter()
            .filter(|f| self.tracker.auto_writable(*f))
            .collect();
        self.record.apply_benefits(&benefits, writable.iter().copied());
        if !writable.is_empty() {
            self.record.cost_per_hour = benefits.cost_per_hour;
        }
        self.tracker.mark_derived(writable);
        self.reaggregate();
        true
    }

    /// Debounced refresh: waits out the debounce interval, resolves the
    /// configuration, and applies the result unless superseded.
    ///
    /// A record with no effective date or no contract type is never looked
    /// up; resolution short-circuits to "no configuration" and the derived
    /// figures collapse to zero.
    pub async fn refresh(&mut self) -> bool {
        let ticket = self.begin_refresh();
        tokio::time::sleep(self.debounce).await;
        let config = self.resolve_current().await;
        self.apply_refresh(ticket, config)
    }

    /// Explicit restore-defaults action.
    ///
    /// Re-runs resolution and computation unconditionally (no debounce) and
    /// overwrites exactly the six benefit-derived fields, re-marking them
    /// derived. The manual cost allowance and the identity fields (date,
    /// contract type, salary) are never touched. Callers disable the trigger
    /// while this is in flight; it supersedes any pending refresh.
    pub async fn restore_defaults(&mut self) {
        self.invalidate();
        self.last_config = self.resolve_current().await;
        let benefits = self.compute_benefits();
        self.record.apply_benefits(&benefits, DerivedField::ALL);
        self.record.cost_per_hour = benefits.cost_per_hour;
        self.tracker.mark_derived(DerivedField::ALL);
        self.reaggregate();
    }

    /// Marks any in-flight refresh as stale.
    fn invalidate(&mut self) {
        self.seq += 1;
    }

    async fn resolve_current(&self) -> Option<CostConfiguration> {
        match (self.record.effective_date, self.record.contract_type) {
            (Some(date), Some(contract_type)) => self.lookup.lookup(date, contract_type).await,
            _ => None,
        }
    }

    fn compute_benefits(&self) -> BenefitSet {
        match &self.last_config {
            Some(config) => compute(
                self.record.monthly_salary,
                config,
                self.effective_working_days(),
                self.record.daily_contracted_hours,
            ),
            None => BenefitSet::zero(),
        }
    }

    fn reaggregate(&mut self) {
        let totals = aggregate(
            self.record.monthly_salary,
            &self.record.benefit_set(),
            self.record.cost_allowance_daily,
            self.effective_working_days(),
        );
        self.record.daily_total_cost = totals.daily_total_cost;
        self.record.monthly_total_cost = totals.monthly_total_cost;
    }
}
