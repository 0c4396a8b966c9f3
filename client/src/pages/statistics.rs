//! Statistics page: overview cards and distribution bars.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::data::statistics::{DISTRIBUTIONS, Distribution, OVERVIEW};

#[component]
pub fn StatisticsPage() -> impl IntoView {
    view! {
        <div class="list-page">
            <PageHeader title="数据统计" description="系统整体运行数据统计和分析。"/>
            <dl class="stat-grid">
                {OVERVIEW
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class="stat-card">
                                <dt class="stat-card__name">{card.name}</dt>
                                <dd class="stat-card__value">{card.total}</dd>
                                <dd class="stat-card__detail">
                                    {format!("{} {}", card.detail_label, card.detail)}
                                </dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <div class="chart-grid">
                {DISTRIBUTIONS.into_iter().map(|dist| view! { <DistributionChart dist=dist/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DistributionChart(dist: Distribution) -> impl IntoView {
    view! {
        <section class="chart-card">
            <h2 class="chart-card__title">{dist.title}</h2>
            <ul class="chart-card__bars">
                {dist
                    .entries
                    .iter()
                    .map(|&(label, value)| {
                        let width = format!("width: {}%", dist.bar_width_percent(value));
                        view! {
                            <li class="chart-bar">
                                <span class="chart-bar__label">{label}</span>
                                <span class="chart-bar__track">
                                    <span class="chart-bar__fill" style=width></span>
                                </span>
                                <span class="chart-bar__value">{value}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
