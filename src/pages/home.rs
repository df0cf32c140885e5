use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::clock::ClockReading;
use crate::components::card::{Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, StatGrid};
use crate::components::icon::{Icon, IconGlyph};
use crate::data::{Transaction, TransactionKind, HOME_STATS, TODAY_TRANSACTIONS};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub tick_ms: u32,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let now = use_state(ClockReading::now);

    // The interval is dropped on unmount or when the period changes.
    {
        let now = now.clone();
        use_effect_with(props.tick_ms, move |tick_ms| {
            let handle = Interval::new(*tick_ms, move || now.set(ClockReading::now()));
            move || drop(handle)
        });
    }

    html! {
        <div class="page">
            <div class="clock">
                <div class="clock-time">{ now.time_label() }</div>
                <p class="clock-date">{ now.date_label() }</p>
            </div>

            <StatGrid stats={HOME_STATS} since="desde ayer" />

            <Card>
                <CardHeader>
                    <CardTitle class="with-icon">
                        <IconGlyph icon={Icon::Clock} />
                        { "Transacciones de Hoy" }
                    </CardTitle>
                    <CardDescription>{ "Registro completo de actividad del día" }</CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="rows">
                        { for TODAY_TRANSACTIONS.iter().map(transaction_row) }
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

fn transaction_row(t: &Transaction) -> Html {
    let (tone, icon) = match t.kind {
        TransactionKind::Sale => ("sale", Icon::Cart),
        TransactionKind::Return => ("return", Icon::Return),
    };
    html! {
        <div class="row" key={t.id}>
            <div class="row-main">
                <div class={classes!("row-icon", tone)}>
                    <IconGlyph {icon} />
                </div>
                <div>
                    <div class="row-title">
                        <span class="row-id">{ t.id }</span>
                        <Badge class="muted">{ t.time }</Badge>
                    </div>
                    <div class="row-customer">
                        <IconGlyph icon={Icon::User} />
                        <span>{ t.customer }</span>
                    </div>
                    <p class="row-items">{ t.items }</p>
                </div>
            </div>
            <div class="row-amount">
                <Badge class={tone}>{ t.amount_label() }</Badge>
                <p class="row-kind">{ t.kind.label() }</p>
            </div>
        </div>
    }
}
