/// Root component: router, shared chrome, and the configured resource
/// client handed to every view through context.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use crate::api::FeedbackApi;
use crate::components::{
    feedback_delete::FeedbackDelete, feedback_detail::FeedbackDetail,
    feedback_form::FeedbackForm, feedback_list::FeedbackList, footer::Footer, navbar::Navbar,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(FeedbackApi::from_env());

    view! {
        <Router>
            <Title text="Feedback Portal"/>
            <div class="d-flex flex-column min-vh-100">
                <Navbar/>
                <main class="container my-5 flex-grow-1">
                    <Routes>
                        <Route path="/" view=FeedbackList/>
                        <Route path="/feedback/add" view=FeedbackForm/>
                        <Route path="/feedback/:id" view=FeedbackDetail/>
                        <Route path="/feedback/:id/edit" view=FeedbackForm/>
                        <Route path="/feedback/:id/delete" view=FeedbackDelete/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
