//! Selector configuration and view resolution for the volcano plot page.
//!
//! Everything here is pure and synchronous: the UI layer owns the selector
//! state and calls into this crate on every change.

use serde::{Deserialize, Serialize};

pub type Year = u16;

/// Display metadata for one registered dataset kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetSpec {
    pub label: &'static str,
    /// Whether picking this dataset also requires a year selection.
    pub requires_year: bool,
}

/// The option sets backing the page's selectors.
///
/// Built once at startup and only ever read. Lookups on unregistered values
/// return `None`/`false` instead of failing.
#[derive(Clone, Copy, Debug)]
pub struct Registry {
    countries: &'static [(&'static str, &'static str)],
    datasets: &'static [(&'static str, DatasetSpec)],
    years: &'static [Year],
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            countries: &[("US", "United States"), ("CA", "Canada")],
            datasets: &[
                (
                    "plot",
                    DatasetSpec {
                        label: "Plot",
                        requires_year: false,
                    },
                ),
                (
                    "table",
                    DatasetSpec {
                        label: "Table",
                        requires_year: true,
                    },
                ),
            ],
            years: &[1, 3, 5],
        }
    }

    pub fn country_label(&self, code: &str) -> Option<&'static str> {
        self.countries
            .iter()
            .find(|(registered, _)| *registered == code)
            .map(|(_, label)| *label)
    }

    pub fn dataset(&self, kind: &str) -> Option<DatasetSpec> {
        self.datasets
            .iter()
            .find(|(registered, _)| *registered == kind)
            .map(|(_, spec)| *spec)
    }

    pub fn is_valid_year(&self, year: Year) -> bool {
        self.years.contains(&year)
    }

    /// Registered countries as (value, label) pairs, in registration order.
    pub fn countries(&self) -> &'static [(&'static str, &'static str)] {
        self.countries
    }

    pub fn datasets(&self) -> &'static [(&'static str, DatasetSpec)] {
        self.datasets
    }

    /// Valid years, in registration order. The last entry doubles as the
    /// decision-table fallback.
    pub fn years(&self) -> &'static [Year] {
        self.years
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// The raw selector triple as the UI currently holds it.
///
/// Any field may be unset, or hold a value that was never registered; the
/// resolver treats both the same way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub country: Option<String>,
    pub dataset: Option<String>,
    pub year: Option<Year>,
}

/// Which decision-table branch a resolved content view landed in.
///
/// The variant tag is the whole payload; how a variant renders is up to the
/// display layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FigureVariant {
    UsPlot,
    UsTable,
    IntlPlot,
    IntlYear1,
    IntlYear3,
    IntlYear5,
}

/// What the page should display for a given selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedView {
    /// `false` keeps the startup placeholder up and the figure hidden.
    pub show_content: bool,
    pub figure: Option<FigureVariant>,
}

impl ResolvedView {
    /// The fallback shown until the selection is complete and valid.
    pub const STARTUP: Self = Self {
        show_content: false,
        figure: None,
    };
}

/// Whether the year selector applies to the candidate dataset kind.
///
/// Unregistered kinds, including no kind at all, hide the selector.
pub fn year_selector_visibility(registry: &Registry, dataset: Option<&str>) -> Visibility {
    match dataset.and_then(|kind| registry.dataset(kind)) {
        Some(spec) if spec.requires_year => Visibility::Visible,
        _ => Visibility::Hidden,
    }
}

/// Resolve the view for the current selector triple.
///
/// Total: any unset or unregistered input falls back to
/// [`ResolvedView::STARTUP`], never an error. Calling it twice with the same
/// inputs yields the same view.
pub fn resolve_view(registry: &Registry, selection: &Selection) -> ResolvedView {
    let Some(country) = selection
        .country
        .as_deref()
        .filter(|code| registry.country_label(code).is_some())
    else {
        return ResolvedView::STARTUP;
    };
    let Some((dataset, spec)) = selection
        .dataset
        .as_deref()
        .and_then(|kind| registry.dataset(kind).map(|spec| (kind, spec)))
    else {
        return ResolvedView::STARTUP;
    };
    if spec.requires_year && !selection.year.is_some_and(|year| registry.is_valid_year(year)) {
        return ResolvedView::STARTUP;
    }

    let figure = if country == "US" {
        // US content is keyed on the dataset alone.
        if dataset == "plot" {
            FigureVariant::UsPlot
        } else {
            FigureVariant::UsTable
        }
    } else if dataset == "plot" {
        FigureVariant::IntlPlot
    } else {
        match selection.year {
            Some(1) => FigureVariant::IntlYear1,
            Some(3) => FigureVariant::IntlYear3,
            _ => FigureVariant::IntlYear5,
        }
    };

    ResolvedView {
        show_content: true,
        figure: Some(figure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: Registry = Registry::new();

    fn selection(country: Option<&str>, dataset: Option<&str>, year: Option<Year>) -> Selection {
        Selection {
            country: country.map(str::to_string),
            dataset: dataset.map(str::to_string),
            year,
        }
    }

    #[test]
    fn year_selector_follows_dataset_flag() {
        for (kind, spec) in REGISTRY.datasets() {
            let expected = if spec.requires_year {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            assert_eq!(year_selector_visibility(&REGISTRY, Some(kind)), expected);
        }
    }

    #[test]
    fn year_selector_hidden_for_unknown_or_unset_dataset() {
        assert_eq!(year_selector_visibility(&REGISTRY, None), Visibility::Hidden);
        assert_eq!(
            year_selector_visibility(&REGISTRY, Some("histogram")),
            Visibility::Hidden
        );
    }

    #[test]
    fn unset_inputs_keep_startup_view() {
        assert_eq!(
            resolve_view(&REGISTRY, &Selection::default()),
            ResolvedView::STARTUP
        );
    }

    #[test]
    fn unknown_country_or_dataset_keeps_startup_view() {
        assert_eq!(
            resolve_view(&REGISTRY, &selection(Some("FR"), Some("plot"), Some(1))),
            ResolvedView::STARTUP
        );
        assert_eq!(
            resolve_view(&REGISTRY, &selection(Some("US"), Some("histogram"), Some(1))),
            ResolvedView::STARTUP
        );
    }

    #[test]
    fn us_plot_ignores_year() {
        for year in [None, Some(1), Some(4), Some(999)] {
            let view = resolve_view(&REGISTRY, &selection(Some("US"), Some("plot"), year));
            assert_eq!(
                view,
                ResolvedView {
                    show_content: true,
                    figure: Some(FigureVariant::UsPlot),
                }
            );
        }
    }

    #[test]
    fn us_table_still_requires_a_valid_year() {
        assert_eq!(
            resolve_view(&REGISTRY, &selection(Some("US"), Some("table"), None)),
            ResolvedView::STARTUP
        );
        assert_eq!(
            resolve_view(&REGISTRY, &selection(Some("US"), Some("table"), Some(2))),
            ResolvedView::STARTUP
        );
        let view = resolve_view(&REGISTRY, &selection(Some("US"), Some("table"), Some(3)));
        assert_eq!(view.figure, Some(FigureVariant::UsTable));
    }

    #[test]
    fn intl_plot_ignores_year() {
        for year in [None, Some(2)] {
            let view = resolve_view(&REGISTRY, &selection(Some("CA"), Some("plot"), year));
            assert_eq!(view.figure, Some(FigureVariant::IntlPlot));
        }
    }

    #[test]
    fn intl_table_selects_by_year() {
        let cases = [
            (1, FigureVariant::IntlYear1),
            (3, FigureVariant::IntlYear3),
            (5, FigureVariant::IntlYear5),
        ];
        for (year, expected) in cases {
            let view = resolve_view(&REGISTRY, &selection(Some("CA"), Some("table"), Some(year)));
            assert_eq!(
                view,
                ResolvedView {
                    show_content: true,
                    figure: Some(expected),
                }
            );
        }
    }

    #[test]
    fn intl_table_rejects_unregistered_year() {
        assert_eq!(
            resolve_view(&REGISTRY, &selection(Some("CA"), Some("table"), Some(4))),
            ResolvedView::STARTUP
        );
        assert_eq!(
            resolve_view(&REGISTRY, &selection(Some("CA"), Some("table"), None)),
            ResolvedView::STARTUP
        );
    }

    #[test]
    fn registry_lookups() {
        assert_eq!(REGISTRY.country_label("US"), Some("United States"));
        assert_eq!(REGISTRY.country_label("CA"), Some("Canada"));
        assert_eq!(REGISTRY.country_label("us"), None);
        assert!(REGISTRY
            .dataset("table")
            .is_some_and(|spec| spec.requires_year));
        assert!(REGISTRY
            .dataset("plot")
            .is_some_and(|spec| !spec.requires_year));
        assert!(REGISTRY.is_valid_year(5));
        assert!(!REGISTRY.is_valid_year(0));
    }

    #[test]
    fn resolver_is_idempotent() {
        let sel = selection(Some("CA"), Some("table"), Some(3));
        assert_eq!(resolve_view(&REGISTRY, &sel), resolve_view(&REGISTRY, &sel));
    }
}
