//! Pulling Program Generator - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a well datasheet to the pulling
//! backend and shows the generated program of maneuvers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title)                                                │
//! │  UploadForm ───────► UploadController ───► HttpTransport    │
//! │                           │                  POST /process/  │
//! │                           ▼                                  │
//! │  ProgramTable ◄──── program rows                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Program rows and the uploaded file abstraction
//! - [`error`] - Transport and submission errors
//! - [`controller`] - Upload workflow state machine
//! - [`components`] - UI components (Hero, UploadForm, ProgramTable)
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod error;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{ManeuverRecord, UploadFile};

// Errors
pub use error::{SubmitError, TransportError};

// State
pub use controller::{InteractionState, Phase, UploadController};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let controller = UploadController::new(HttpTransport::from_config());

    view! {
        <div class="container">
            <Hero/>
            <UploadForm controller=controller/>
            <ProgramTable rows=controller.program_rows()/>
        </div>
    }
}
