/// Main page for the bookmark exporter

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::download::export_bookmarks;
use crate::export::ExportFormat;
use crate::session::{CONNECT_DELAY_MS, ConnectTicket, SessionAction, SessionState};
use crate::timer::sleep;
use crate::ui::components::{BookmarkList, ConnectionStatus};

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(SessionState::new);

    // Connect handler: loading now, connected after the delay unless disconnected meanwhile
    let on_connect = {
        let session = session.clone();

        Callback::from(move |_: MouseEvent| {
            if session.loading || session.connected {
                return;
            }

            let ticket = ConnectTicket::new();
            session.dispatch(SessionAction::BeginConnect(ticket.clone()));

            let session = session.clone();
            spawn_local(async move {
                if let Err(e) = sleep(CONNECT_DELAY_MS).await {
                    log::warn!("Connect delay failed: {}", e);
                }
                session.dispatch(SessionAction::CompleteConnect(ticket));
            });
        })
    };

    let on_disconnect = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Disconnect);
        })
    };

    // Export failures are logged only; the page shows no error state
    let on_export = {
        let session = session.clone();
        move |format: ExportFormat| {
            let session = session.clone();
            Callback::from(move |_: MouseEvent| {
                if let Err(e) = export_bookmarks(&session.bookmarks, format) {
                    log::warn!("Export to {} failed: {}", format.file_name(), e);
                }
            })
        }
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">{"Twitter Bookmarks Exporter"}</h1>
                <p class="page-subtitle">
                    {"Connect your Twitter account to export all your bookmarks as a beautifully formatted HTML file"}
                </p>
            </div>

            <div class="panel">
                <div class="auth-row">
                    <span class="auth-label">{"Secure Authentication"}</span>
                    <span class="auth-hint">{"Uses Twitter OAuth 2.0"}</span>
                </div>

                if !session.connected {
                    <>
                    <Button onclick={on_connect} disabled={session.loading} variant={ButtonVariant::Primary} block={true}>
                        {if session.loading { "Connecting..." } else { "Connect Twitter Account" }}
                    </Button>
                    if session.loading {
                        <div class="loading-text-center">
                            <Spinner />
                        </div>
                    }
                    </>
                } else {
                    <div class="flex-column-gap">
                        <ConnectionStatus on_disconnect={on_disconnect} />
                        <BookmarkList bookmarks={session.bookmarks.clone()} />
                        {for ExportFormat::ALL.iter().map(|format| html! {
                            <Button onclick={on_export(*format)} variant={ButtonVariant::Secondary} block={true}>
                                {format.label()}
                            </Button>
                        })}
                    </div>
                }
            </div>

            <p class="footer">
                {"Your data is exported locally and no information is stored on our servers."}
            </p>
        </div>
    }
}
