use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "Product Management API",
        version = "1.0.0",
        description = "REST API for managing products with CRUD operations",
        contact(
            name = "Syariful Anam",
            email = "anam@gmail.com",
            url = "https://github.com/syarifulanam"
        ),
        license(name = "Apache 2.0", url = "https://www.apache.org/licenses/LICENSE-2.0")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local Development Server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
