use leptos::*;

/// 1-5 rating as filled and empty stars.
#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        {(1..=5u8)
            .map(|star| {
                let class = if star <= rating {
                    "bi bi-star-fill text-warning"
                } else {
                    "bi bi-star text-secondary"
                };
                view! { <i class=class></i> }
            })
            .collect::<Vec<_>>()}
    }
}
