use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::core::{
    error::{McpResult, TimezoneServerError},
    models::{AddRequest, GetTimezoneRequest},
    provider::TimezoneResolver,
    utils::{self, SERVER_NAME, SERVER_VERSION},
};

/// Timezone MCP Server exposing `add` and `get_timezone`
#[derive(Clone)]
pub struct TimezoneService {
    resolver: TimezoneResolver,
    tool_router: ToolRouter<TimezoneService>,
    prompt_router: PromptRouter<TimezoneService>,
}

impl TimezoneService {
    pub fn new() -> Self {
        Self {
            resolver: TimezoneResolver::new(),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    fn known_locations_line(&self) -> String {
        self.resolver
            .locations()
            .into_iter()
            .map(|entry| entry.location)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn generate_status_content(&self) -> String {
        format!(
            r#"Timezone MCP Server Status

Server: {} v{}
Tools Available: 2
Prompts Available: 1
Resources Available: {}
Known Locations: {}

Transports:
- SSE: GET /sse, POST /sse/message
- Streamable HTTP: /mcp"#,
            SERVER_NAME,
            SERVER_VERSION,
            utils::AVAILABLE_RESOURCES.len(),
            self.resolver.location_count()
        )
    }

    fn generate_help_content(&self) -> String {
        format!(
            r#"Timezone MCP Server Help

TOOLS:
- add: Add two numbers together
  - a: number (required)
  - b: number (required)
  - Example: {{"a": 2, "b": 3}}

- get_timezone: Get the IANA timezone given a location name (city/country)
  - location: city or location name (required)
  - Example: {{"location": "New York"}}

RESOURCES:
- timezone://status: Server status
- timezone://help: This help documentation
- timezone://locations: Known locations with their IANA timezone and current UTC offset

LOOKUP RULES:
- Matching ignores case and surrounding whitespace
- Unknown locations return timezone: null with error "{}"

KNOWN LOCATIONS: {}"#,
            utils::LOCATION_NOT_RECOGNIZED,
            self.known_locations_line()
        )
    }

    fn generate_locations_content(&self) -> McpResult<String> {
        serde_json::to_string_pretty(&self.resolver.locations())
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    pub(crate) fn read_resource_content(&self, uri: &str) -> McpResult<String> {
        match uri {
            "timezone://status" => Ok(self.generate_status_content()),
            "timezone://help" => Ok(self.generate_help_content()),
            "timezone://locations" => self.generate_locations_content(),
            _ => Err(TimezoneServerError::ResourceNotFound {
                uri: uri.to_string(),
            }
            .into()),
        }
    }

    fn generate_guidance_content(&self) -> String {
        format!(
            r#"Timezone Lookup Guidance:

1. **Use city names**
   - Pass a major city, e.g. 'New York', 'London', 'Tokyo'
   - Case and surrounding spaces do not matter: ' NEW YORK ' works

2. **Supported locations**
   - {}

3. **Unrecognized locations**
   - The result carries timezone: null and an error message
   - Ask the user for a nearby major city and try again

4. **Results**
   - Timezones are IANA identifiers such as 'America/New_York'"#,
            self.known_locations_line()
        )
    }
}

impl Default for TimezoneService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TimezoneService {
    #[tool(description = "Add two numbers together")]
    pub(crate) async fn add(
        &self,
        Parameters(req): Parameters<AddRequest>,
    ) -> McpResult<CallToolResult> {
        tracing::debug!(a = req.a, b = req.b, "add");
        Ok(CallToolResult::success(vec![Content::text(
            utils::format_number(req.a + req.b),
        )]))
    }

    #[tool(description = "Get the IANA timezone given a location name (city/country)")]
    pub(crate) async fn get_timezone(
        &self,
        Parameters(req): Parameters<GetTimezoneRequest>,
    ) -> McpResult<CallToolResult> {
        let lookup = self.resolver.lookup(&req.location);
        tracing::debug!(
            location = %lookup.location,
            resolved = lookup.is_resolved(),
            "get_timezone"
        );

        let structured = serde_json::to_value(&lookup)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        let mut result =
            CallToolResult::success(vec![Content::text(lookup.message()), Content::json(&lookup)?]);
        result.structured_content = Some(structured);
        Ok(result)
    }
}

#[prompt_router]
impl TimezoneService {
    /// Guidance for phrasing locations passed to get_timezone
    #[prompt(name = "timezone_guidance")]
    async fn timezone_guidance(
        &self,
        _ctx: RequestContext<RoleServer>,
    ) -> McpResult<Vec<PromptMessage>> {
        Ok(vec![PromptMessage {
            role: PromptMessageRole::Assistant,
            content: PromptMessageContent::text(self.generate_guidance_content()),
        }])
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for TimezoneService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(format!(
                "Timezone MCP Server. Tools: add, get_timezone. get_timezone accepts major city names ({}) and returns IANA timezone identifiers.",
                self.known_locations_line()
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListResourcesResult> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("timezone://status", "server-status"),
                self.create_resource_text("timezone://help", "help-documentation"),
                self.create_resource_text("timezone://locations", "known-locations"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ReadResourceResult> {
        let content = self.read_resource_content(&uri)?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(content, uri)],
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListResourceTemplatesResult> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Timezone MCP Server session initialized");
        Ok(self.get_info())
    }
}
