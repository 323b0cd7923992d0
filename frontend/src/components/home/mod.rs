//! Dashboard landing page: training widgets and overview tiles. Content is
//! static for now; the cards exist so the portal has a home to land on after
//! login.

use yew::{html, Component, Context, Html};

pub struct HomeComponent;

struct TrainingRow {
    title: &'static str,
    actions: &'static [&'static str],
}

const NEW_TRAININGS: &[TrainingRow] = &[
    TrainingRow { title: "Leadership Skills", actions: &["Ver", "Inscrever"] },
    TrainingRow { title: "Department Head", actions: &["Ver", "Inscrever"] },
    TrainingRow { title: "Safety Training", actions: &["Ver", "Inscrever"] },
];

const UPCOMING_SESSIONS: &[TrainingRow] = &[
    TrainingRow { title: "Leadership", actions: &["Entrar", "Cancelar"] },
    TrainingRow { title: "Effective", actions: &["Entrar", "Cancelar"] },
    TrainingRow { title: "Project", actions: &["Entrar", "Cancelar"] },
];

const GOALS: &[TrainingRow] = &[
    TrainingRow { title: "Equipe de vendas concluiu as metas", actions: &["Ver"] },
    TrainingRow { title: "RH atualizou os materiais", actions: &["Ver"] },
    TrainingRow { title: "Novas sessões disponíveis", actions: &["Explorar"] },
];

fn widget_card(title: Html, rows: &'static [TrainingRow]) -> Html {
    html! {
        <div class="card">
            <div class="card-header"><h2>{ title }</h2></div>
            <div class="card-body">
                {
                    rows.iter().map(|row| html! {
                        <div class="widget-row">
                            <span>{ row.title }</span>
                            <div class="widget-actions">
                                {
                                    row.actions.iter().map(|action| html! {
                                        <button class="btn small">{ *action }</button>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn overview_tile(value: &str, caption: &str) -> Html {
    html! {
        <div class="card tile">
            <p class="tile-value">{ value }</p>
            <p class="muted">{ caption }</p>
        </div>
    }
}

impl Component for HomeComponent {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        HomeComponent
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="dashboard">
                <div class="widget-grid">
                    { widget_card(html! { <>{ "Novos Treinamentos" }<span class="badge">{ 3 }</span></> }, NEW_TRAININGS) }
                    { widget_card(html! { "Metas de Treinamento" }, GOALS) }
                    { widget_card(html! { "Próximas Sessões" }, UPCOMING_SESSIONS) }
                </div>
                <div class="tile-grid">
                    { overview_tile("15/20", "Treinamentos concluídos") }
                    { overview_tile("10", "Sessões em progresso") }
                    { overview_tile("4.5", "Avaliação média") }
                    { overview_tile("9.0", "Metas alcançadas") }
                </div>
            </div>
        }
    }
}
