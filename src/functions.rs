//! Remote operations, one struct per request.
use crate::enums::{ChatAction, ChatList, InternalLinkType, ProxyType};
use crate::types::{self, Chats, FormattedText, HttpUrl, Proxies, Proxy, Sessions};

functions! {
    /// Returns an ordered list of chats from the beginning of a chat list.
    #[derive(Default)]
    pub struct GetChats: "getChats" -> Chats {
        /// The chat list in which to return chats; pass `None` to get chats from the main chat list.
        pub chat_list: Option<ChatList>,
        /// The maximum number of chats to be returned.
        pub limit: i32,
    }

    /// Returns information about the type of an internal link.
    ///
    /// Returns a 404 error if the link is not internal.
    #[derive(Default)]
    pub struct GetInternalLinkType: "getInternalLinkType" -> InternalLinkType {
        pub link: String,
    }

    /// Sends a notification about user activity in a chat.
    #[derive(Default)]
    pub struct SendChatAction: "sendChatAction" -> types::Ok {
        pub chat_id: i64,
        /// If not 0, a message thread identifier in which the action was performed.
        pub message_thread_id: i64,
        /// The action description; pass `None` to cancel the currently active action.
        pub action: Option<ChatAction>,
    }

    /// Returns all active sessions of the current user.
    #[derive(Default)]
    pub struct GetActiveSessions: "getActiveSessions" -> Sessions {}

    /// Terminates a session of the current user.
    #[derive(Default)]
    pub struct TerminateSession: "terminateSession" -> types::Ok {
        #[serde(with = "crate::int64")]
        pub session_id: i64,
    }

    /// Returns list of proxies that are currently set up. Can be called before authorization.
    #[derive(Default)]
    pub struct GetProxies: "getProxies" -> Proxies {}

    /// Adds a proxy server for network requests. Can be called before authorization.
    pub struct AddProxy: "addProxy" -> Proxy {
        pub server: String,
        pub port: i32,
        /// True, if the proxy needs to be enabled.
        pub enable: bool,
        #[serde(rename = "type")]
        pub r#type: ProxyType,
    }

    /// Returns an HTTPS link, which can be used to add a proxy.
    #[derive(Default)]
    pub struct GetProxyLink: "getProxyLink" -> HttpUrl {
        pub proxy_id: i32,
    }

    /// Parses Markdown entities in a human-friendly format, ignoring markup errors.
    #[derive(Default)]
    pub struct ParseMarkdown: "parseMarkdown" -> FormattedText {
        pub text: FormattedText,
    }

    /// Informs the server that some trending sticker sets have been viewed by the user.
    #[derive(Default)]
    pub struct ViewTrendingStickerSets: "viewTrendingStickerSets" -> types::Ok {
        #[serde(with = "crate::int64::vec")]
        pub sticker_set_ids: Vec<i64>,
    }

    /// Sets the verbosity level of the internal logging of TDLib.
    #[derive(Default)]
    pub struct SetLogVerbosityLevel: "setLogVerbosityLevel" -> types::Ok {
        pub new_verbosity_level: i32,
    }

    /// Closes the TDLib instance. All databases will be flushed to disk and properly closed.
    #[derive(Default)]
    pub struct Close: "close" -> types::Ok {}
}
