//! Filter staging buffer.
//!
//! The filter sidebar edits each field independently, but the session
//! only ever sees a whole [`FilterSpec`] committed at once: "Apply" calls
//! [`FilterDraft::to_spec`] and hands the result to
//! `DashboardSession::apply_filters` in a single transition, so partial
//! application is never observable.

use boston_shootings_models::FilterSpec;

/// Per-field staged filter values, edited by the sidebar between commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    staged: FilterSpec,
}

impl FilterDraft {
    /// Creates an empty draft (all fields unrestricted).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            staged: FilterSpec::new(),
        }
    }

    /// Creates a draft pre-populated from a committed spec, so the
    /// sidebar can re-open showing what is currently applied.
    #[must_use]
    pub const fn from_spec(spec: FilterSpec) -> Self {
        Self { staged: spec }
    }

    /// Adds `year` to the staged set if absent, otherwise removes it.
    /// Mirrors one year checkbox.
    pub fn toggle_year(&mut self, year: &str) {
        if !self.staged.years.remove(year) {
            self.staged.years.insert(year.to_string());
        }
    }

    /// Stages every year in `years`. Mirrors checking "All Years".
    pub fn set_all_years<I, S>(&mut self, years: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.staged.years = years.into_iter().map(Into::into).collect();
    }

    /// Clears the staged year set back to unrestricted. Mirrors
    /// unchecking "All Years".
    pub fn clear_years(&mut self) {
        self.staged.years.clear();
    }

    /// Stages a district. Empty means unrestricted.
    pub fn set_district(&mut self, district: impl Into<String>) {
        self.staged.district = district.into();
    }

    /// Stages the neighborhood selected on the boundary map. This is the
    /// callback target the map invokes with a clicked region's name.
    pub fn select_neighborhood(&mut self, name: impl Into<String>) {
        self.staged.neighborhood = name.into();
    }

    /// Stages a shooting type. Empty means unrestricted.
    pub fn set_shooting_type(&mut self, shooting_type: impl Into<String>) {
        self.staged.shooting_type = shooting_type.into();
    }

    /// Stages a victim gender. Empty means unrestricted.
    pub fn set_victim_gender(&mut self, gender: impl Into<String>) {
        self.staged.victim_gender = gender.into();
    }

    /// Stages a victim race. Empty means unrestricted.
    pub fn set_victim_race(&mut self, race: impl Into<String>) {
        self.staged.victim_race = race.into();
    }

    /// Stages the multi-victim gate. `false` stages "unrestricted",
    /// never "single-victim only".
    pub const fn set_multi_victim_only(&mut self, multi_victim_only: bool) {
        self.staged.multi_victim_only = multi_victim_only;
    }

    /// The staged spec as it would be committed.
    #[must_use]
    pub fn to_spec(&self) -> FilterSpec {
        self.staged.clone()
    }

    /// Resets every staged field to unrestricted. Mirrors the "Clear
    /// Filters" button, which also clears the committed spec.
    pub fn reset(&mut self) {
        self.staged = FilterSpec::default();
    }
}
