//! Login screen. Authentication is simulated: both fields are required, then
//! a short delay stands in for the real credential check that was never wired
//! up. Do not mistake this for access control.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub struct LoginComponent {
    usuario: String,
    senha: String,
    erro: Option<String>,
    loading: bool,
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<()>,
}

pub enum Msg {
    SetUsuario(String),
    SetSenha(String),
    Submit,
    Authenticated,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            usuario: String::new(),
            senha: String::new(),
            erro: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsuario(value) => {
                self.usuario = value;
                false
            }
            Msg::SetSenha(value) => {
                self.senha = value;
                false
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                if self.usuario.is_empty() || self.senha.is_empty() {
                    self.erro = Some("Por favor, preencha ambos os campos.".to_string());
                    return true;
                }
                self.erro = None;
                self.loading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(1500).await;
                    link.send_message(Msg::Authenticated);
                });
                true
            }
            Msg::Authenticated => {
                self.loading = false;
                ctx.props().on_login.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="login-screen">
                <div class="card login-card">
                    <div class="card-header centered">
                        <h1 class="brand">{ "Projeta Engenharia" }</h1>
                        <p class="muted">{ "Bem-vindo! Faça seu login para acessar o sistema." }</p>
                    </div>
                    <div class="card-body">
                        {
                            if let Some(erro) = &self.erro {
                                html! { <div class="login-error">{ erro.clone() }</div> }
                            } else {
                                html! {}
                            }
                        }
                        <form {onsubmit}>
                            <label for="usuario">{ "Usuário" }</label>
                            <input
                                id="usuario"
                                type="text"
                                placeholder="Digite seu usuário"
                                value={self.usuario.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetUsuario(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                            <label for="senha">{ "Senha" }</label>
                            <input
                                id="senha"
                                type="password"
                                placeholder="Digite sua senha"
                                value={self.senha.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::SetSenha(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                            <button type="submit" class="btn primary full" disabled={self.loading}>
                                { if self.loading { "Aguarde..." } else { "Entrar" } }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        }
    }
}
