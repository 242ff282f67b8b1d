//! Concrete objects.
//!
//! Each struct carries its own `@type` on the wire. Fields typed as an enum from
//! [`crate::enums`] are resolved through that family's registry.
use crate::enums::{ProxyType, TextEntityType};

variants! {
    /// An object of this type is returned on a successful function call for certain functions.
    #[derive(Default)]
    pub struct Ok: "ok" {}

    /// Contains some text.
    #[derive(Default)]
    pub struct Text: "text" {
        pub text: String,
    }

    /// Contains an HTTP URL.
    #[derive(Default)]
    pub struct HttpUrl: "httpUrl" {
        pub url: String,
    }

    /// Represents a list of chats.
    #[derive(Default)]
    pub struct Chats: "chats" {
        /// Approximate total number of chats found.
        pub total_count: i32,
        pub chat_ids: Vec<i64>,
    }

    /// Contains information about one session in a Telegram application used by the current user.
    #[derive(Default)]
    pub struct Session: "session" {
        #[serde(with = "crate::int64")]
        pub id: i64,
        pub is_current: bool,
        pub is_password_pending: bool,
        pub api_id: i32,
        pub application_name: String,
        pub application_version: String,
        pub is_official_application: bool,
        pub device_model: String,
        pub platform: String,
        pub system_version: String,
        pub log_in_date: i32,
        pub last_active_date: i32,
        pub ip: String,
        pub country: String,
        pub region: String,
    }

    /// Contains a list of sessions.
    #[derive(Default)]
    pub struct Sessions: "sessions" {
        pub sessions: Vec<Session>,
        pub inactive_session_ttl_days: i32,
    }

    /// Contains information about a proxy server.
    pub struct Proxy: "proxy" {
        pub id: i32,
        pub server: String,
        pub port: i32,
        pub last_used_date: i32,
        pub is_enabled: bool,
        #[serde(rename = "type")]
        pub r#type: ProxyType,
    }

    /// Represents a list of proxy servers.
    #[derive(Default)]
    pub struct Proxies: "proxies" {
        pub proxies: Vec<Proxy>,
    }

    /// A text with some entities.
    #[derive(Default)]
    pub struct FormattedText: "formattedText" {
        pub text: String,
        /// Entities contained in the text, sorted by offset.
        pub entities: Vec<TextEntity>,
    }

    /// Represents a part of the text that needs to be formatted in some unusual way.
    pub struct TextEntity: "textEntity" {
        /// Offset of the entity, in UTF-16 code units.
        pub offset: i32,
        /// Length of the entity, in UTF-16 code units.
        pub length: i32,
        #[serde(rename = "type")]
        pub r#type: TextEntityType,
    }
}

variants! {
    /// The user is typing a message.
    #[derive(Default)]
    pub struct ChatActionTyping: "chatActionTyping" {}
    #[derive(Default)]
    pub struct ChatActionRecordingVideo: "chatActionRecordingVideo" {}
    #[derive(Default)]
    pub struct ChatActionUploadingVideo: "chatActionUploadingVideo" {
        /// Upload progress, as a percentage.
        pub progress: i32,
    }
    #[derive(Default)]
    pub struct ChatActionRecordingVoiceNote: "chatActionRecordingVoiceNote" {}
    #[derive(Default)]
    pub struct ChatActionUploadingVoiceNote: "chatActionUploadingVoiceNote" {
        pub progress: i32,
    }
    #[derive(Default)]
    pub struct ChatActionUploadingPhoto: "chatActionUploadingPhoto" {
        pub progress: i32,
    }
    #[derive(Default)]
    pub struct ChatActionUploadingDocument: "chatActionUploadingDocument" {
        pub progress: i32,
    }
    #[derive(Default)]
    pub struct ChatActionChoosingSticker: "chatActionChoosingSticker" {}
    #[derive(Default)]
    pub struct ChatActionChoosingLocation: "chatActionChoosingLocation" {}
    #[derive(Default)]
    pub struct ChatActionChoosingContact: "chatActionChoosingContact" {}
    #[derive(Default)]
    pub struct ChatActionStartPlayingGame: "chatActionStartPlayingGame" {}
    #[derive(Default)]
    pub struct ChatActionRecordingVideoNote: "chatActionRecordingVideoNote" {}
    #[derive(Default)]
    pub struct ChatActionUploadingVideoNote: "chatActionUploadingVideoNote" {
        pub progress: i32,
    }
    /// The user is watching animations sent by the other party by clicking on an animated emoji.
    #[derive(Default)]
    pub struct ChatActionWatchingAnimations: "chatActionWatchingAnimations" {
        pub emoji: String,
    }
    /// The user has canceled the previous action.
    #[derive(Default)]
    pub struct ChatActionCancel: "chatActionCancel" {}
}

variants! {
    /// A SOCKS5 proxy server.
    #[derive(Default)]
    pub struct ProxyTypeSocks5: "proxyTypeSocks5" {
        pub username: String,
        pub password: String,
    }
    /// A HTTP transparent proxy server.
    #[derive(Default)]
    pub struct ProxyTypeHttp: "proxyTypeHttp" {
        pub username: String,
        pub password: String,
        /// Pass true if the proxy supports only HTTP requests and doesn't support transparent TCP connections via HTTP CONNECT method.
        pub http_only: bool,
    }
    /// An MTProto proxy server.
    #[derive(Default)]
    pub struct ProxyTypeMtproto: "proxyTypeMtproto" {
        /// The proxy's secret in hexadecimal encoding.
        pub secret: String,
    }
}

variants! {
    #[derive(Default)]
    pub struct ChatListMain: "chatListMain" {}
    #[derive(Default)]
    pub struct ChatListArchive: "chatListArchive" {}
    #[derive(Default)]
    pub struct ChatListFilter: "chatListFilter" {
        pub chat_filter_id: i32,
    }
}

variants! {
    #[derive(Default)]
    pub struct TextEntityTypeMention: "textEntityTypeMention" {}
    #[derive(Default)]
    pub struct TextEntityTypeHashtag: "textEntityTypeHashtag" {}
    #[derive(Default)]
    pub struct TextEntityTypeCashtag: "textEntityTypeCashtag" {}
    #[derive(Default)]
    pub struct TextEntityTypeBotCommand: "textEntityTypeBotCommand" {}
    #[derive(Default)]
    pub struct TextEntityTypeUrl: "textEntityTypeUrl" {}
    #[derive(Default)]
    pub struct TextEntityTypeEmailAddress: "textEntityTypeEmailAddress" {}
    #[derive(Default)]
    pub struct TextEntityTypePhoneNumber: "textEntityTypePhoneNumber" {}
    #[derive(Default)]
    pub struct TextEntityTypeBankCardNumber: "textEntityTypeBankCardNumber" {}
    #[derive(Default)]
    pub struct TextEntityTypeBold: "textEntityTypeBold" {}
    #[derive(Default)]
    pub struct TextEntityTypeItalic: "textEntityTypeItalic" {}
    #[derive(Default)]
    pub struct TextEntityTypeUnderline: "textEntityTypeUnderline" {}
    #[derive(Default)]
    pub struct TextEntityTypeStrikethrough: "textEntityTypeStrikethrough" {}
    #[derive(Default)]
    pub struct TextEntityTypeCode: "textEntityTypeCode" {}
    #[derive(Default)]
    pub struct TextEntityTypePre: "textEntityTypePre" {}
    /// Text that must be formatted as if inside pre, and code HTML tags.
    #[derive(Default)]
    pub struct TextEntityTypePreCode: "textEntityTypePreCode" {
        /// Programming language of the code; as defined by the sender.
        pub language: String,
    }
    /// A text description shown instead of a raw URL.
    #[derive(Default)]
    pub struct TextEntityTypeTextUrl: "textEntityTypeTextUrl" {
        pub url: String,
    }
    /// A text shows instead of a raw mention of the user (e.g., when the user has no username).
    #[derive(Default)]
    pub struct TextEntityTypeMentionName: "textEntityTypeMentionName" {
        pub user_id: i64,
    }
}

variants! {
    #[derive(Default)]
    pub struct PassportElementTypePersonalDetails: "passportElementTypePersonalDetails" {}
    #[derive(Default)]
    pub struct PassportElementTypePassport: "passportElementTypePassport" {}
    #[derive(Default)]
    pub struct PassportElementTypeDriverLicense: "passportElementTypeDriverLicense" {}
    #[derive(Default)]
    pub struct PassportElementTypeIdentityCard: "passportElementTypeIdentityCard" {}
    #[derive(Default)]
    pub struct PassportElementTypeInternalPassport: "passportElementTypeInternalPassport" {}
    #[derive(Default)]
    pub struct PassportElementTypeAddress: "passportElementTypeAddress" {}
    #[derive(Default)]
    pub struct PassportElementTypeUtilityBill: "passportElementTypeUtilityBill" {}
    #[derive(Default)]
    pub struct PassportElementTypeBankStatement: "passportElementTypeBankStatement" {}
    #[derive(Default)]
    pub struct PassportElementTypeRentalAgreement: "passportElementTypeRentalAgreement" {}
    #[derive(Default)]
    pub struct PassportElementTypePassportRegistration: "passportElementTypePassportRegistration" {}
    #[derive(Default)]
    pub struct PassportElementTypeTemporaryRegistration: "passportElementTypeTemporaryRegistration" {}
    #[derive(Default)]
    pub struct PassportElementTypePhoneNumber: "passportElementTypePhoneNumber" {}
    #[derive(Default)]
    pub struct PassportElementTypeEmailAddress: "passportElementTypeEmailAddress" {}
}

variants! {
    /// The link is a link to the active sessions section of the app.
    #[derive(Default)]
    pub struct InternalLinkTypeActiveSessions: "internalLinkTypeActiveSessions" {}
    /// The link contains an authentication code.
    #[derive(Default)]
    pub struct InternalLinkTypeAuthenticationCode: "internalLinkTypeAuthenticationCode" {
        pub code: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeBackground: "internalLinkTypeBackground" {
        pub background_name: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeBotStart: "internalLinkTypeBotStart" {
        pub bot_username: String,
        pub start_parameter: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeBotStartInGroup: "internalLinkTypeBotStartInGroup" {
        pub bot_username: String,
        pub start_parameter: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeChangePhoneNumber: "internalLinkTypeChangePhoneNumber" {}
    #[derive(Default)]
    pub struct InternalLinkTypeChatInvite: "internalLinkTypeChatInvite" {
        pub invite_link: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeFilterSettings: "internalLinkTypeFilterSettings" {}
    #[derive(Default)]
    pub struct InternalLinkTypeGame: "internalLinkTypeGame" {
        pub bot_username: String,
        pub game_short_name: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeLanguagePack: "internalLinkTypeLanguagePack" {
        pub language_pack_id: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeMessage: "internalLinkTypeMessage" {
        pub url: String,
    }
    /// The link contains a message draft text.
    #[derive(Default)]
    pub struct InternalLinkTypeMessageDraft: "internalLinkTypeMessageDraft" {
        pub text: FormattedText,
        /// True, if the first line of the text contains a link.
        pub contains_link: bool,
    }
    #[derive(Default)]
    pub struct InternalLinkTypePassportDataRequest: "internalLinkTypePassportDataRequest" {
        pub bot_user_id: i64,
        pub scope: String,
        pub public_key: String,
        pub nonce: String,
        pub callback_url: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypePhoneNumberConfirmation: "internalLinkTypePhoneNumberConfirmation" {
        pub hash: String,
        pub phone_number: String,
    }
    /// The link is a link to a proxy.
    pub struct InternalLinkTypeProxy: "internalLinkTypeProxy" {
        pub server: String,
        pub port: i32,
        #[serde(rename = "type")]
        pub r#type: ProxyType,
    }
    #[derive(Default)]
    pub struct InternalLinkTypePublicChat: "internalLinkTypePublicChat" {
        pub chat_username: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeQrCodeAuthentication: "internalLinkTypeQrCodeAuthentication" {}
    #[derive(Default)]
    pub struct InternalLinkTypeSettings: "internalLinkTypeSettings" {}
    #[derive(Default)]
    pub struct InternalLinkTypeStickerSet: "internalLinkTypeStickerSet" {
        pub sticker_set_name: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeTheme: "internalLinkTypeTheme" {
        pub theme_name: String,
    }
    #[derive(Default)]
    pub struct InternalLinkTypeThemeSettings: "internalLinkTypeThemeSettings" {}
    /// The link is an unknown tg: link.
    #[derive(Default)]
    pub struct InternalLinkTypeUnknownDeepLink: "internalLinkTypeUnknownDeepLink" {
        pub link: String,
    }
    /// The link is a link to a video chat.
    #[derive(Default)]
    pub struct InternalLinkTypeVideoChat: "internalLinkTypeVideoChat" {
        pub chat_username: String,
        pub invite_hash: String,
        pub is_live_stream: bool,
    }
}
