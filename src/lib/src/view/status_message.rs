use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::view::http::{
    MSG_BAD_REQUEST, MSG_INTERNAL_SERVER_ERROR, MSG_RESOURCE_CREATED, MSG_RESOURCE_FOUND,
    MSG_RESOURCE_NOT_FOUND, STATUS_ERROR, STATUS_SUCCESS,
};

#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct StatusMessage {
    pub status: String,
    pub status_message: String,
}

impl StatusMessage {
    pub fn resource_found() -> StatusMessage {
        StatusMessage {
            status: STATUS_SUCCESS.to_string(),
            status_message: MSG_RESOURCE_FOUND.to_string(),
        }
    }

    pub fn resource_created() -> StatusMessage {
        StatusMessage {
            status: STATUS_SUCCESS.to_string(),
            status_message: MSG_RESOURCE_CREATED.to_string(),
        }
    }

    pub fn resource_not_found() -> StatusMessage {
        StatusMessage {
            status: STATUS_ERROR.to_string(),
            status_message: MSG_RESOURCE_NOT_FOUND.to_string(),
        }
    }

    pub fn bad_request() -> StatusMessage {
        StatusMessage {
            status: STATUS_ERROR.to_string(),
            status_message: MSG_BAD_REQUEST.to_string(),
        }
    }

    pub fn internal_server_error() -> StatusMessage {
        StatusMessage {
            status: STATUS_ERROR.to_string(),
            status_message: MSG_INTERNAL_SERVER_ERROR.to_string(),
        }
    }
}

/// Error body: a status plus a human readable description of what went wrong.
#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct StatusMessageDescription {
    #[serde(flatten)]
    pub status: StatusMessage,
    pub desc: String,
}

impl StatusMessageDescription {
    pub fn bad_request(desc: impl AsRef<str>) -> StatusMessageDescription {
        StatusMessageDescription {
            status: StatusMessage::bad_request(),
            desc: desc.as_ref().to_string(),
        }
    }

    pub fn internal_server_error(desc: impl AsRef<str>) -> StatusMessageDescription {
        StatusMessageDescription {
            status: StatusMessage::internal_server_error(),
            desc: desc.as_ref().to_string(),
        }
    }

    pub fn not_found(desc: impl AsRef<str>) -> StatusMessageDescription {
        StatusMessageDescription {
            status: StatusMessage::resource_not_found(),
            desc: desc.as_ref().to_string(),
        }
    }
}
