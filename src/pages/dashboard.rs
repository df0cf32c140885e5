use yew::prelude::*;

use crate::components::card::{Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, StatGrid};
use crate::components::chart::{CategoryDonut, LoanBarChart, VisitsLineChart};
use crate::data::{CATEGORIES, DASHBOARD_STATS, POPULAR_BOOKS, WEEKLY_LOANS, WEEKLY_VISITS};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="page">
            <p class="lede">{ "Monitorea el rendimiento y las métricas clave de tu librería" }</p>

            <StatGrid stats={DASHBOARD_STATS} since="desde el mes pasado" />

            <div class="grid-3">
                <Card class="span-2">
                    <CardHeader>
                        <CardTitle>{ "Préstamos y Devoluciones" }</CardTitle>
                        <CardDescription>{ "Actividad semanal de la biblioteca" }</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <LoanBarChart days={WEEKLY_LOANS} />
                        <div class="legend inline">
                            <span><i class="swatch" style="background:#10b981"></i>{ "préstamos" }</span>
                            <span><i class="swatch" style="background:#3b82f6"></i>{ "devoluciones" }</span>
                        </div>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>{ "Categorías Populares" }</CardTitle>
                        <CardDescription>{ "Distribución por género" }</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <CategoryDonut categories={CATEGORIES} />
                        <div class="legend">
                            { for CATEGORIES.iter().map(|c| html! {
                                <div class="legend-row" key={c.name}>
                                    <span>
                                        <i class="swatch round" style={format!("background:{}", c.color)}></i>
                                        { c.name }
                                    </span>
                                    <strong>{ format!("{}%", c.percent) }</strong>
                                </div>
                            }) }
                        </div>
                    </CardContent>
                </Card>
            </div>

            <div class="grid-2">
                <Card>
                    <CardHeader>
                        <CardTitle>{ "Actividad Semanal" }</CardTitle>
                        <CardDescription>{ "Visitas diarias a la biblioteca" }</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <VisitsLineChart visits={WEEKLY_VISITS} />
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle>{ "Libros Más Populares" }</CardTitle>
                        <CardDescription>{ "Los más prestados este mes" }</CardDescription>
                    </CardHeader>
                    <CardContent>
                        <div class="rows">
                            { for POPULAR_BOOKS.iter().map(|b| html! {
                                <div class="row" key={b.title}>
                                    <div>
                                        <h4 class="row-title">{ b.title }</h4>
                                        <p class="row-items">{ b.author }</p>
                                    </div>
                                    <Badge class="sale">{ format!("{} préstamos", b.loans) }</Badge>
                                </div>
                            }) }
                        </div>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
