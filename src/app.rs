use const_format::concatcp;
use leptos::*;
use shared::{resolve_view, year_selector_visibility, Registry, ResolvedView, Selection, Year};

use crate::figures::placeholder_figure;
use crate::plotly_shim;

static REGISTRY: Registry = Registry::new();

const ASSET_DIR: &str = "public";
const STARTUP_IMG: &str = concatcp!(ASSET_DIR, "/volcano-startup.png");
const FIGURE_DIV_ID: &str = "vp-graph";

/// A `<select>` over (value, label) pairs that starts on a disabled
/// placeholder entry, so the initial selection is genuinely unset.
#[component]
fn SelectorDropdown(
    options: Vec<(String, String)>,
    placeholder: &'static str,
    on_select: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <select on:change=move |ev| {
            let value = event_target_value(&ev);
            on_select.set((!value.is_empty()).then_some(value));
        }>
            <option value="" disabled=true selected=true>{placeholder}</option>
            {options
                .into_iter()
                .map(|(value, label)| view! { <option value=value>{label}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
fn YearDropdown(set_year: WriteSignal<Option<Year>>) -> impl IntoView {
    view! {
        <select on:change=move |ev| {
            set_year.set(event_target_value(&ev).parse().ok());
        }>
            {REGISTRY
                .years()
                .iter()
                .map(|year| {
                    view! { <option value=year.to_string()>{format!("{year}-year stat")}</option> }
                })
                .collect_view()}
        </select>
    }
}

/// The extra header dropdowns that ship with the page but feed no callback.
#[component]
fn StaticYearDropdown(label_suffix: &'static str) -> impl IntoView {
    view! {
        <select>
            {REGISTRY
                .years()
                .iter()
                .map(|year| {
                    view! {
                        <option value=year.to_string()>
                            {format!("{year}-year stat{label_suffix}")}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn FigurePanel(resolved: Signal<ResolvedView>) -> impl IntoView {
    create_effect(move |_| {
        if let Some(variant) = resolved.get().figure {
            let plot = placeholder_figure(variant);
            spawn_local(async move {
                plotly_shim::react(FIGURE_DIV_ID, &plot).await;
            });
        }
    });

    view! {
        <img
            class="startup-img"
            src=STARTUP_IMG
            alt="startup"
            style:display=move || if resolved.get().show_content { "none" } else { "block" }
        />
        <div
            id=FIGURE_DIV_ID
            style:display=move || if resolved.get().show_content { "block" } else { "none" }
        ></div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ControlTab {
    About,
    Data,
}

#[component]
fn ControlTabs(
    set_country: WriteSignal<Option<String>>,
    set_dataset: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (tab, set_tab) = create_signal(ControlTab::About);
    let tab_display = move |wanted: ControlTab| {
        if tab.get() == wanted {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <div class="control-tabs">
            <div class="tab-headers">
                <button
                    class:active=move || tab.get() == ControlTab::About
                    on:click=move |_| set_tab.set(ControlTab::About)
                >
                    "About"
                </button>
                <button
                    class:active=move || tab.get() == ControlTab::Data
                    on:click=move |_| set_tab.set(ControlTab::Data)
                >
                    "Data"
                </button>
            </div>
            <div style:display=move || tab_display(ControlTab::About)>
                <AboutTab/>
            </div>
            <div style:display=move || tab_display(ControlTab::Data)>
                <DataTab set_country=set_country set_dataset=set_dataset/>
            </div>
        </div>
    }
}

#[component]
fn AboutTab() -> impl IntoView {
    view! {
        <div class="control-tab">
            <h4>"What is Volcano Plot?"</h4>
            <p>
                "You can use Volcano Plot to interactively identify clinically \
                 meaningful markers in genomic experiments, i.e., markers that \
                 are statistically significant and have an effect size greater \
                 than some threshold. Specifically, volcano plots depict the \
                 negative log-base-10 p-values plotted against their effect \
                 size."
            </p>
            <p>
                "In the \"Data\" tab, you can select a dataset to view on the \
                 plot. In the \"View\" tab, you can control the color of the \
                 highlighted points, as well as the threshold lines that define \
                 which values are significant. You can also access metadata \
                 from hovering and clicking on the graph."
            </p>
        </div>
    }
}

#[component]
fn DataTab(
    set_country: WriteSignal<Option<String>>,
    set_dataset: WriteSignal<Option<String>>,
) -> impl IntoView {
    let countries = REGISTRY
        .countries()
        .iter()
        .map(|(value, label)| ((*value).to_string(), (*label).to_string()))
        .collect::<Vec<_>>();
    let datasets = REGISTRY
        .datasets()
        .iter()
        .map(|(value, spec)| ((*value).to_string(), spec.label.to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="control-tab">
            <div class="app-controls-block">
                <div class="app-controls-name">"Country:"</div>
                <SelectorDropdown
                    options=countries
                    placeholder="Select a country"
                    on_select=set_country
                />
                <div class="app-controls-name">"Dataset:"</div>
                <SelectorDropdown
                    options=datasets
                    placeholder="Select a dataset"
                    on_select=set_dataset
                />
            </div>
        </div>
    }
}

#[component]
fn VolcanoPage() -> impl IntoView {
    let (country, set_country) = create_signal(None::<String>);
    let (dataset, set_dataset) = create_signal(None::<String>);
    let (year, set_year) = create_signal(Some(REGISTRY.years()[0]));

    let resolved = Signal::derive(move || {
        resolve_view(
            &REGISTRY,
            &Selection {
                country: country.get(),
                dataset: dataset.get(),
                year: year.get(),
            },
        )
    });
    let year_selector =
        Signal::derive(move || year_selector_visibility(&REGISTRY, dataset.get().as_deref()));

    view! {
        <div class="app-body">
            <div class="graph-area">
                <div class="dropdown-area">
                    <div
                        class="dropdown-wrapper"
                        style:display=move || {
                            if year_selector.get().is_visible() { "block" } else { "none" }
                        }
                    >
                        <YearDropdown set_year=set_year/>
                    </div>
                    <div class="dropdown-wrapper2">
                        <StaticYearDropdown label_suffix="2"/>
                        <StaticYearDropdown label_suffix="3"/>
                    </div>
                </div>
                <FigurePanel resolved=resolved/>
            </div>
            <ControlTabs set_country=set_country set_dataset=set_dataset/>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container">
            <VolcanoPage/>
        </main>
    }
}
