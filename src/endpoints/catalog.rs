//! Hubstaff v2 endpoint table
//!
//! Every tool the crate exposes is one entry here. List-valued filters are
//! sent comma-joined, which is what the API accepts for these endpoints.

use super::{EndpointDescriptor, PathParam, QueryParam};

const ORGANIZATION_ID: PathParam = PathParam::new("organization_id", "The ID of the organization.");
const PROJECT_ID: PathParam = PathParam::new("project_id", "The ID of the project.");

const PAGE_START_ID: QueryParam = QueryParam::string("page_start_id", "The page start ID for pagination.");
const PAGE_LIMIT: QueryParam = QueryParam::integer("page_limit", "The number of results to return per page.");
const INCLUDE: QueryParam = QueryParam::string("include", "Specify related data to side load.");
const USER_IDS: QueryParam = QueryParam::string_array("user_ids", "List of user IDs to filter by.");
const TASK_IDS: QueryParam = QueryParam::string_array("task_ids", "List of task IDs to filter by.");
const PROJECT_IDS: QueryParam = QueryParam::string_array("project_ids", "List of project IDs to filter by.");

const DATE_START: QueryParam =
    QueryParam::string("date_start", "Start date in ISO 8601 format.").wire("date[start]");
const DATE_STOP: QueryParam =
    QueryParam::string("date_stop", "Stop date in ISO 8601 format (inclusive).").wire("date[stop]");
const UPDATED_START: QueryParam =
    QueryParam::string("updated_start", "Start time in ISO 8601 format.").wire("updated[start]");
const UPDATED_STOP: QueryParam =
    QueryParam::string("updated_stop", "Stop time in ISO 8601 format (exclusive).").wire("updated[stop]");

const ORGANIZATION_ONLY: &[PathParam] = &[ORGANIZATION_ID];
const PROJECT_ONLY: &[PathParam] = &[PROJECT_ID];

pub const RETRIEVE_ORGANIZATIONS: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_organizations",
    description: "Retrieve organizations from Hubstaff.",
    path_template: "/v2/organizations",
    path_params: &[],
    query_params: &[
        QueryParam::string("page_start_id", "The ID to start retrieving organizations from.").required(),
        QueryParam::integer("page_limit", "The number of organizations to retrieve per page.").required(),
    ],
};

pub const RETRIEVE_USER: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_user",
    description: "Retrieve a user from Hubstaff by user ID.",
    path_template: "/v2/users/{user_id}",
    path_params: &[PathParam::new("user_id", "The ID of the user to retrieve.")],
    query_params: &[],
};

pub const RETRIEVE_CLIENT: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_client",
    description: "Retrieve a client from Hubstaff by client ID.",
    path_template: "/v2/clients/{client_id}",
    path_params: &[PathParam::new("client_id", "The ID of the client to retrieve.")],
    query_params: &[],
};

pub const RETRIEVE_CLIENTS: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_clients",
    description: "Retrieve a list of clients for a given organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/clients",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_PROJECTS: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_projects",
    description: "Retrieve projects for a specific organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/projects",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_PROJECT_MEMBERS: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_project_members",
    description: "Retrieve members of a specific project in Hubstaff.",
    path_template: "/v2/projects/{project_id}/members",
    path_params: PROJECT_ONLY,
    query_params: &[],
};

pub const RETRIEVE_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_activities",
    description: "Retrieve activities for a specific organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/activities",
    path_params: ORGANIZATION_ONLY,
    query_params: &[
        PAGE_START_ID,
        PAGE_LIMIT,
        QueryParam::string("time_slot_start", "The start time in ISO 8601 format.").wire("time_slot[start]"),
        QueryParam::string("time_slot_stop", "The stop time in ISO 8601 format (exclusive).").wire("time_slot[stop]"),
        USER_IDS,
        TASK_IDS,
        PROJECT_IDS,
        INCLUDE,
        QueryParam::string("time_zone", "The time zone name for the activity."),
    ],
};

pub const RETRIEVE_DAILY_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_daily_activities",
    description: "Retrieve daily activities for an organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/activities/daily",
    path_params: ORGANIZATION_ONLY,
    query_params: &[
        PAGE_START_ID,
        PAGE_LIMIT,
        DATE_START,
        DATE_STOP,
        USER_IDS,
        TASK_IDS,
        PROJECT_IDS,
        INCLUDE,
    ],
};

pub const RETRIEVE_DAILY_ACTIVITIES_BY_UPDATED_TIME: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_daily_activities_by_updated_time",
    description: "Retrieve daily activities of an organization by updated time from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/activities/daily/updates",
    path_params: ORGANIZATION_ONLY,
    query_params: &[
        UPDATED_START,
        UPDATED_STOP,
        PAGE_START_ID,
        PAGE_LIMIT,
        USER_IDS,
        TASK_IDS,
        PROJECT_IDS,
        INCLUDE,
    ],
};

pub const RETRIEVE_DAILY_PROJECT_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_daily_project_activities",
    description: "Retrieve daily project activities from Hubstaff.",
    path_template: "/v2/projects/{project_id}/activities/daily",
    path_params: PROJECT_ONLY,
    query_params: &[
        PAGE_START_ID,
        PAGE_LIMIT,
        DATE_START,
        DATE_STOP,
        USER_IDS,
        TASK_IDS,
        INCLUDE,
    ],
};

pub const RETRIEVE_PROJECT_ACTIVITIES_BY_UPDATED_TIME: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_project_activities_by_updated_time",
    description: "Retrieve project activities by updated time from Hubstaff.",
    path_template: "/v2/projects/{project_id}/activities/daily/updates",
    path_params: PROJECT_ONLY,
    query_params: &[
        UPDATED_START,
        UPDATED_STOP,
        PAGE_START_ID,
        PAGE_LIMIT,
        USER_IDS,
        TASK_IDS,
        INCLUDE,
    ],
};

pub const RETRIEVE_PROJECT_LAST_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_project_last_activities",
    description: "Retrieve the last activities of a project from Hubstaff.",
    path_template: "/v2/projects/{project_id}/last_activities",
    path_params: PROJECT_ONLY,
    query_params: &[
        PAGE_START_ID,
        PAGE_LIMIT,
        QueryParam::boolean("include_removed", "Whether to include removed users."),
        INCLUDE,
    ],
};

pub const RETRIEVE_ATTENDANCE_SCHEDULES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_attendance_schedules",
    description: "Retrieve attendance schedules for a specific organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/attendance_schedules",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_ATTENDANCE_SHIFTS: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_attendance_shifts",
    description: "Retrieve attendance shifts for a specific organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/attendance_shifts",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_TIME_OFF_REQUESTS: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_time_off_requests",
    description: "Retrieve time off requests for a specific organization.",
    path_template: "/v2/organizations/{organization_id}/time_off_requests",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_UNUSUAL_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_unusual_activities",
    description: "Retrieve unusual activities for an organization.",
    path_template: "/v2/organizations/{organization_id}/insights/unusual_activities",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_LOCATIONS: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_locations",
    description: "Retrieve locations for a specified organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/locations",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_PROJECT_LOCATIONS: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_project_locations",
    description: "Retrieve locations for a specific project from Hubstaff.",
    path_template: "/v2/projects/{project_id}/locations",
    path_params: PROJECT_ONLY,
    query_params: &[],
};

pub const RETRIEVE_URL_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_url_activities",
    description: "Retrieve URL activities for a specified organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/url_activities",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_PROJECT_URL_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_project_url_activities",
    description: "Retrieve URL activities for a specific project from Hubstaff.",
    path_template: "/v2/projects/{project_id}/url_activities",
    path_params: PROJECT_ONLY,
    query_params: &[],
};

pub const RETRIEVE_DAILY_URL_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_daily_url_activities",
    description: "Retrieve daily URL activities for a specified organization from Hubstaff.",
    path_template: "/v2/organizations/{organization_id}/url_activities/daily",
    path_params: ORGANIZATION_ONLY,
    query_params: &[],
};

pub const RETRIEVE_PROJECT_DAILY_URL_ACTIVITIES: EndpointDescriptor = EndpointDescriptor {
    name: "retrieve_project_daily_url_activities",
    description: "Retrieve daily URL activities for a specific project from Hubstaff.",
    path_template: "/v2/projects/{project_id}/url_activities/daily",
    path_params: PROJECT_ONLY,
    query_params: &[],
};

static ALL: &[EndpointDescriptor] = &[
    RETRIEVE_ORGANIZATIONS,
    RETRIEVE_USER,
    RETRIEVE_CLIENT,
    RETRIEVE_CLIENTS,
    RETRIEVE_PROJECTS,
    RETRIEVE_PROJECT_MEMBERS,
    RETRIEVE_ACTIVITIES,
    RETRIEVE_DAILY_ACTIVITIES,
    RETRIEVE_DAILY_ACTIVITIES_BY_UPDATED_TIME,
    RETRIEVE_DAILY_PROJECT_ACTIVITIES,
    RETRIEVE_PROJECT_ACTIVITIES_BY_UPDATED_TIME,
    RETRIEVE_PROJECT_LAST_ACTIVITIES,
    RETRIEVE_ATTENDANCE_SCHEDULES,
    RETRIEVE_ATTENDANCE_SHIFTS,
    RETRIEVE_TIME_OFF_REQUESTS,
    RETRIEVE_UNUSUAL_ACTIVITIES,
    RETRIEVE_LOCATIONS,
    RETRIEVE_PROJECT_LOCATIONS,
    RETRIEVE_URL_ACTIVITIES,
    RETRIEVE_PROJECT_URL_ACTIVITIES,
    RETRIEVE_DAILY_URL_ACTIVITIES,
    RETRIEVE_PROJECT_DAILY_URL_ACTIVITIES,
];

/// Every known endpoint, in registration order
pub fn all() -> &'static [EndpointDescriptor] {
    ALL
}

pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    ALL.iter().find(|d| d.name == name)
}
