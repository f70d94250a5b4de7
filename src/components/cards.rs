use yew::prelude::*;

fn default_color() -> String {
    "blue".to_string()
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[prop_or_else(default_color)]
    pub color: String,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class={classes!("feature-card-icon", format!("pastel-{}", props.color))}>
                <span aria-hidden="true">{&props.icon}</span>
            </div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgramCardProps {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub href: String,
    #[prop_or_else(default_color)]
    pub color: String,
}

#[function_component(ProgramCard)]
pub fn program_card(props: &ProgramCardProps) -> Html {
    html! {
        <a class="program-card" href={props.href.clone()}>
            <div class="program-card-image">
                <img src={props.image.clone()} alt={props.title.clone()} loading="lazy" />
                <div class="program-card-overlay">
                    <span class={classes!("program-card-badge", format!("pastel-{}", props.color))}>
                        {&props.subtitle}
                    </span>
                    <h3>{&props.title}</h3>
                </div>
            </div>
            <div class="program-card-body">
                <p>{&props.description}</p>
                <span class="program-card-more">{"Conocer más →"}</span>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let initial = props.author.chars().next().unwrap_or('•').to_string();
    html! {
        <div class="testimonial-card">
            <div class="testimonial-stars" aria-hidden="true">{"★★★★★"}</div>
            <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", props.quote)}</p>
            <div class="testimonial-author">
                <div class="testimonial-avatar">{initial}</div>
                <div>
                    <p class="testimonial-name">{&props.author}</p>
                    <p class="testimonial-role">{&props.role}</p>
                </div>
            </div>
        </div>
    }
}
