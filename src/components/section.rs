use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("page-section", props.class.clone())}>
            <div class="container">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    #[prop_or_default]
    pub badge: Option<String>,
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or(true)]
    pub centered: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.centered.then_some("centered"))}>
            if let Some(badge) = &props.badge {
                <span class="section-badge">{badge}</span>
            }
            <h2>{&props.title}</h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}
