use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Password login and token introspection"),
        (name = "Courses", description = "Course catalog, teacher links and course reviews"),
        (name = "Teachers", description = "Teacher catalog and teacher reviews"),
        (name = "Course reviews", description = "Course review collection"),
        (name = "Teacher reviews", description = "Teacher review collection"),
        (name = "Catalog", description = "Faculty and study program management"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Course Ratings API",
        version = "1.0.0",
        description = "Ratings service for university courses and teachers",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
