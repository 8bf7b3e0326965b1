use yew::{AttrValue, Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct MonthNavActionsProps {
    pub on_prev: Callback<MouseEvent>,
    pub on_today: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(MonthNavActions)]
pub fn month_nav_actions(props: &MonthNavActionsProps) -> Html {
    html! {
        <div class="actions calendar-nav-actions">
            <button class="btn" onclick={props.on_prev.clone()}>{ "Prev" }</button>
            <button class="btn" onclick={props.on_today.clone()}>{ "Today" }</button>
            <button class="btn" onclick={props.on_next.clone()}>{ "Next" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="calendar-empty">{ props.message.clone() }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    pub on_retry: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let on_retry = props.on_retry.clone();
    html! {
        <div class="banner error-banner">
            <span>{ props.message.clone() }</span>
            <button class="btn" onclick={move |_: MouseEvent| on_retry.emit(())}>
                { "Retry" }
            </button>
        </div>
    }
}
