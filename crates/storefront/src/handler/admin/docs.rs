use super::{REVIEWS_PATH, SERVICE_REVIEWS_PATH};
use shared::model::ContentKind;
use utoipa::openapi::{
    OpenApi, OpenApiBuilder, Required,
    path::{
        HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
        PathsBuilder,
    },
    response::ResponseBuilder,
};

const TAG: &str = "Admin";

fn id_param() -> ParameterBuilder {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Record id"))
}

fn query_param(name: &str, description: &str) -> ParameterBuilder {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some(description))
}

fn operation(
    summary: String,
    params: Vec<ParameterBuilder>,
    responses: &[(&str, &str)],
) -> Operation {
    let mut builder = OperationBuilder::new().tag(TAG).summary(Some(summary));

    for param in params {
        builder = builder.parameter(param.build());
    }
    for (status, description) in responses {
        builder = builder.response(
            *status,
            ResponseBuilder::new().description(*description).build(),
        );
    }

    builder.build()
}

/// Paths of the console routes, which are built per resource type and so
/// cannot carry `#[utoipa::path]` themselves.
pub fn console_openapi() -> OpenApi {
    let mut paths = PathsBuilder::new();

    for kind in ContentKind::all() {
        let label = kind.label();
        let collection = format!("/api/admin/{kind}");

        paths = paths
            .path(
                collection.clone(),
                PathItemBuilder::new()
                    .operation(
                        HttpMethod::Get,
                        operation(
                            format!("List {label} records"),
                            vec![query_param("page", "Page number, clamped to the last page")],
                            &[("200", "One page of records"), ("502", "Commerce API error")],
                        ),
                    )
                    .operation(
                        HttpMethod::Post,
                        operation(
                            format!("Create a {label}"),
                            Vec::new(),
                            &[
                                ("201", "Record confirmed by the server"),
                                ("400", "Validation failed"),
                                ("502", "Commerce API error"),
                            ],
                        ),
                    )
                    .build(),
            )
            .path(
                format!("{collection}/state"),
                PathItemBuilder::new()
                    .operation(
                        HttpMethod::Get,
                        operation(
                            format!("Request state of the {label} collection"),
                            Vec::new(),
                            &[("200", "Data, loading flag and last error")],
                        ),
                    )
                    .build(),
            )
            .path(
                format!("{collection}/{{id}}"),
                PathItemBuilder::new()
                    .operation(
                        HttpMethod::Put,
                        operation(
                            format!("Update a {label}"),
                            vec![id_param()],
                            &[
                                ("200", "Record confirmed by the server"),
                                ("400", "Validation failed"),
                                ("404", "Record not found"),
                            ],
                        ),
                    )
                    .operation(
                        HttpMethod::Delete,
                        operation(
                            format!("Delete a {label}"),
                            vec![id_param()],
                            &[("200", "Record deleted"), ("404", "Record not found")],
                        ),
                    )
                    .build(),
            );
    }

    for (base, label) in [(REVIEWS_PATH, "review"), (SERVICE_REVIEWS_PATH, "service review")] {
        paths = paths
            .path(
                base,
                PathItemBuilder::new()
                    .operation(
                        HttpMethod::Get,
                        operation(
                            format!("List {label} records"),
                            vec![
                                query_param("status", "pending, approved or rejected"),
                                query_param("page", "Page number, clamped to the last page"),
                            ],
                            &[("200", "One page of records"), ("502", "Commerce API error")],
                        ),
                    )
                    .build(),
            )
            .path(
                format!("{base}/state"),
                PathItemBuilder::new()
                    .operation(
                        HttpMethod::Get,
                        operation(
                            format!("Request state of the {label} queue"),
                            Vec::new(),
                            &[("200", "Data, loading flag and last error")],
                        ),
                    )
                    .build(),
            );

        for action in ["approve", "reject"] {
            paths = paths.path(
                format!("{base}/{{id}}/{action}"),
                PathItemBuilder::new()
                    .operation(
                        HttpMethod::Put,
                        operation(
                            format!("{action} a {label}"),
                            vec![id_param()],
                            &[
                                ("200", "Moderation confirmed; the queue is fetched again"),
                                ("404", "Record not found"),
                            ],
                        ),
                    )
                    .build(),
            );
        }

        paths = paths.path(
            format!("{base}/{{id}}"),
            PathItemBuilder::new()
                .operation(
                    HttpMethod::Delete,
                    operation(
                        format!("Delete a {label}"),
                        vec![id_param()],
                        &[("200", "Record deleted"), ("404", "Record not found")],
                    ),
                )
                .build(),
        );
    }

    OpenApiBuilder::new().paths(paths).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_console_route() {
        let api = console_openapi();
        let paths = &api.paths.paths;

        for kind in ContentKind::all() {
            let record = paths
                .get(&format!("/api/admin/{kind}/{{id}}"))
                .expect("record path documented");
            assert!(record.put.is_some() && record.delete.is_some());
            assert!(paths.contains_key(&format!("/api/admin/{kind}/state")));
        }

        let collection = &paths["/api/admin/core-values"];
        assert!(collection.get.is_some() && collection.post.is_some());
        assert!(paths.contains_key("/api/admin/reviews/{id}/approve"));
        assert!(paths.contains_key("/api/admin/service-reviews/{id}/reject"));
    }
}
