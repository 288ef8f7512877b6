pub mod animal_service;
pub mod api_client;
pub mod auth_service;
pub mod grupo_service;
pub mod iatf_service;
pub mod prediction_service;
pub mod report_service;
pub mod semental_service;

pub use animal_service::AnimalService;
pub use api_client::ApiClient;
pub use grupo_service::GrupoService;
pub use iatf_service::IatfService;
pub use prediction_service::PredictionService;
pub use report_service::ReportService;
pub use semental_service::SementalService;
