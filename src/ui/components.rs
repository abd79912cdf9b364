/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::bookmark::BookmarkRecord;

#[derive(Properties, PartialEq)]
pub struct BookmarkCardProps {
    pub bookmark: BookmarkRecord,
}

#[function_component(BookmarkCard)]
pub fn bookmark_card(props: &BookmarkCardProps) -> Html {
    let bookmark = &props.bookmark;

    html! {
        <div class="bookmark-card">
            <p class="bookmark-text">{&bookmark.text}</p>
            <div class="bookmark-meta">{bookmark.meta_line()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookmarkListProps {
    pub bookmarks: Vec<BookmarkRecord>,
}

#[function_component(BookmarkList)]
pub fn bookmark_list(props: &BookmarkListProps) -> Html {
    html! {
        <div class="bookmark-list">
            <div class="bookmark-list-header">
                <h3 class="bookmark-list-title">{"Your Bookmarks"}</h3>
                <span class="bookmark-count">{format!("{} items", props.bookmarks.len())}</span>
            </div>
            {for props.bookmarks.iter().map(|bookmark| html! {
                <BookmarkCard key={bookmark.id.clone()} bookmark={bookmark.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConnectionStatusProps {
    pub on_disconnect: Callback<MouseEvent>,
}

#[function_component(ConnectionStatus)]
pub fn connection_status(props: &ConnectionStatusProps) -> Html {
    html! {
        <div class="connection-status">
            <div class="connection-label">
                <span class="status-dot"></span>
                <span>{"Connected to Twitter"}</span>
            </div>
            <Button onclick={props.on_disconnect.clone()} variant={ButtonVariant::Link}>
                {"Disconnect"}
            </Button>
        </div>
    }
}
