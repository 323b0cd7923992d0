//! Root component: simulated login gate, then enum-based page switching with
//! the Projeta navigation bar. There is intentionally no router; the portal
//! has three pages and navigation is plain component state.

use yew::{classes, html, Component, Context, Html};

use crate::components::frequency::FrequencyComponent;
use crate::components::home::HomeComponent;
use crate::components::login::LoginComponent;
use crate::components::term::TermComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Frequencia,
    Termo,
}

impl Page {
    const ALL: [Page; 3] = [Page::Home, Page::Frequencia, Page::Termo];

    fn label(self) -> &'static str {
        match self {
            Page::Home => "Dashboard",
            Page::Frequencia => "Controle de Frequência",
            Page::Termo => "Termo de Responsabilidade",
        }
    }
}

pub enum Msg {
    LoggedIn,
    Navigate(Page),
    Logout,
}

pub struct App {
    logged_in: bool,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            logged_in: false,
            page: Page::Home,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LoggedIn => {
                self.logged_in = true;
                self.page = Page::Home;
                true
            }
            Msg::Navigate(page) => {
                if self.page != page {
                    self.page = page;
                    true
                } else {
                    false
                }
            }
            Msg::Logout => {
                self.logged_in = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.logged_in {
            return html! {
                <LoginComponent on_login={ctx.link().callback(|_| Msg::LoggedIn)} />
            };
        }

        let link = ctx.link();
        let tabs = Page::ALL
            .iter()
            .map(|&page| {
                html! {
                    <button
                        class={classes!("nav-tab", if self.page == page { "active" } else { "" })}
                        onclick={link.callback(move |_| Msg::Navigate(page))}
                    >
                        { page.label() }
                    </button>
                }
            })
            .collect::<Html>();

        html! {
            <div class="portal">
                <header class="portal-header">
                    <span class="brand">{ "Projeta Engenharia" }</span>
                    <nav class="nav-tabs">
                        { tabs }
                        <button class="nav-tab" onclick={link.callback(|_| Msg::Logout)}>
                            { "Sair" }
                        </button>
                    </nav>
                </header>
                <main class="portal-main">
                    {
                        match self.page {
                            Page::Home => html! { <HomeComponent /> },
                            Page::Frequencia => html! { <FrequencyComponent /> },
                            Page::Termo => html! { <TermComponent /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
