use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::data::StatCard;

#[derive(Properties, PartialEq)]
pub struct BoxProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &BoxProps) -> Html {
    html! { <div class={classes!("card", props.class.clone())}>{ props.children.clone() }</div> }
}

#[function_component(CardHeader)]
pub fn card_header(props: &BoxProps) -> Html {
    html! { <div class={classes!("card-header", props.class.clone())}>{ props.children.clone() }</div> }
}

#[function_component(CardContent)]
pub fn card_content(props: &BoxProps) -> Html {
    html! { <div class={classes!("card-content", props.class.clone())}>{ props.children.clone() }</div> }
}

#[function_component(CardTitle)]
pub fn card_title(props: &BoxProps) -> Html {
    html! { <h3 class={classes!("card-title", props.class.clone())}>{ props.children.clone() }</h3> }
}

#[function_component(CardDescription)]
pub fn card_description(props: &BoxProps) -> Html {
    html! { <p class={classes!("card-description", props.class.clone())}>{ props.children.clone() }</p> }
}

#[function_component(Badge)]
pub fn badge(props: &BoxProps) -> Html {
    html! { <span class={classes!("badge", props.class.clone())}>{ props.children.clone() }</span> }
}

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub stats: &'static [StatCard],
    /// Comparison period shown after the change, e.g. "desde ayer".
    pub since: AttrValue,
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    html! {
        <div class="stat-grid">
            { for props.stats.iter().map(|stat| html! {
                <Card class="stat-card">
                    <CardHeader class="stat-card-header">
                        <CardTitle class="stat-card-title">{ stat.title }</CardTitle>
                        <IconGlyph icon={stat.icon} class={stat.tone.class()} />
                    </CardHeader>
                    <CardContent>
                        <div class="stat-value">{ stat.value }</div>
                        <p class="stat-change">{ format!("{} {}", stat.change, props.since) }</p>
                    </CardContent>
                </Card>
            }) }
        </div>
    }
}
