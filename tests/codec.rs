use serde_json::{Value, json};
use tdcall::{
    Error, Family, Object,
    enums::{ChatAction, ChatList, InternalLinkType, PassportElementType, ProxyType, TextEntityType},
    functions::TerminateSession,
    types::{
        self, ChatActionCancel, ChatActionChoosingContact, ChatActionChoosingLocation,
        ChatActionChoosingSticker, ChatActionRecordingVideo, ChatActionRecordingVideoNote,
        ChatActionRecordingVoiceNote, ChatActionStartPlayingGame, ChatActionTyping,
        ChatActionUploadingDocument, ChatActionUploadingPhoto, ChatActionUploadingVideo,
        ChatActionUploadingVideoNote, ChatActionUploadingVoiceNote,
        ChatActionWatchingAnimations, ChatListArchive, ChatListFilter, ChatListMain,
        FormattedText, InternalLinkTypeActiveSessions, InternalLinkTypeAuthenticationCode,
        InternalLinkTypeBackground, InternalLinkTypeBotStart,
        InternalLinkTypeBotStartInGroup, InternalLinkTypeChangePhoneNumber,
        InternalLinkTypeChatInvite, InternalLinkTypeFilterSettings, InternalLinkTypeGame,
        InternalLinkTypeLanguagePack, InternalLinkTypeMessage, InternalLinkTypeMessageDraft,
        InternalLinkTypePassportDataRequest, InternalLinkTypePhoneNumberConfirmation,
        InternalLinkTypeProxy, InternalLinkTypePublicChat,
        InternalLinkTypeQrCodeAuthentication, InternalLinkTypeSettings,
        InternalLinkTypeStickerSet, InternalLinkTypeTheme, InternalLinkTypeThemeSettings,
        InternalLinkTypeUnknownDeepLink, InternalLinkTypeVideoChat,
        PassportElementTypeAddress, PassportElementTypeBankStatement,
        PassportElementTypeDriverLicense, PassportElementTypeEmailAddress,
        PassportElementTypeIdentityCard, PassportElementTypeInternalPassport,
        PassportElementTypePassport, PassportElementTypePassportRegistration,
        PassportElementTypePersonalDetails, PassportElementTypePhoneNumber,
        PassportElementTypeRentalAgreement, PassportElementTypeTemporaryRegistration,
        PassportElementTypeUtilityBill, Proxies, ProxyTypeHttp, ProxyTypeMtproto,
        ProxyTypeSocks5, Session, TextEntity, TextEntityTypeBankCardNumber,
        TextEntityTypeBold, TextEntityTypeBotCommand, TextEntityTypeCashtag,
        TextEntityTypeCode, TextEntityTypeEmailAddress, TextEntityTypeHashtag,
        TextEntityTypeItalic, TextEntityTypeMention, TextEntityTypeMentionName,
        TextEntityTypePhoneNumber, TextEntityTypePre, TextEntityTypePreCode,
        TextEntityTypeStrikethrough, TextEntityTypeTextUrl, TextEntityTypeUnderline,
        TextEntityTypeUrl,
    },
};

fn round_trip<F>(values: Vec<F>) -> anyhow::Result<()>
where
    F: Family + PartialEq + std::fmt::Debug,
{
    for value in values {
        let bytes = value.encode()?;
        let wire: Value = serde_json::from_slice(&bytes)?;
        assert_eq!(wire["@type"], value.discriminator(), "{value:?}");
        assert_eq!(F::decode(&bytes)?, value);
    }
    Ok(())
}

fn socks5() -> ProxyType {
    ProxyTypeSocks5 {
        username: "user".to_string(),
        password: "secret".to_string(),
    }
    .into()
}

#[test]
fn round_trip_chat_action() -> anyhow::Result<()> {
    round_trip::<ChatAction>(vec![
        ChatActionTyping {}.into(),
        ChatActionRecordingVideo {}.into(),
        ChatActionUploadingVideo { progress: 10 }.into(),
        ChatActionUploadingVideo::default().into(),
        ChatActionRecordingVoiceNote {}.into(),
        ChatActionUploadingVoiceNote { progress: 20 }.into(),
        ChatActionUploadingPhoto { progress: 30 }.into(),
        ChatActionUploadingDocument { progress: 40 }.into(),
        ChatActionChoosingSticker {}.into(),
        ChatActionChoosingLocation {}.into(),
        ChatActionChoosingContact {}.into(),
        ChatActionStartPlayingGame {}.into(),
        ChatActionRecordingVideoNote {}.into(),
        ChatActionUploadingVideoNote { progress: 50 }.into(),
        ChatActionWatchingAnimations {
            emoji: "🎉".to_string(),
        }
        .into(),
        ChatActionWatchingAnimations::default().into(),
        ChatActionCancel {}.into(),
    ])
}

#[test]
fn round_trip_proxy_type_and_chat_list() -> anyhow::Result<()> {
    round_trip::<ProxyType>(vec![
        socks5(),
        ProxyTypeSocks5::default().into(),
        ProxyTypeHttp {
            username: "u".to_string(),
            password: "p".to_string(),
            http_only: true,
        }
        .into(),
        ProxyTypeMtproto {
            secret: "dd00".to_string(),
        }
        .into(),
    ])?;
    round_trip::<ChatList>(vec![
        ChatListMain {}.into(),
        ChatListArchive {}.into(),
        ChatListFilter { chat_filter_id: 3 }.into(),
    ])
}

#[test]
fn round_trip_passport_element_type() -> anyhow::Result<()> {
    round_trip::<PassportElementType>(vec![
        PassportElementTypePersonalDetails {}.into(),
        PassportElementTypePassport {}.into(),
        PassportElementTypeDriverLicense {}.into(),
        PassportElementTypeIdentityCard {}.into(),
        PassportElementTypeInternalPassport {}.into(),
        PassportElementTypeAddress {}.into(),
        PassportElementTypeUtilityBill {}.into(),
        PassportElementTypeBankStatement {}.into(),
        PassportElementTypeRentalAgreement {}.into(),
        PassportElementTypePassportRegistration {}.into(),
        PassportElementTypeTemporaryRegistration {}.into(),
        PassportElementTypePhoneNumber {}.into(),
        PassportElementTypeEmailAddress {}.into(),
    ])
}

#[test]
fn round_trip_text_entity_type() -> anyhow::Result<()> {
    round_trip::<TextEntityType>(vec![
        TextEntityTypeMention {}.into(),
        TextEntityTypeHashtag {}.into(),
        TextEntityTypeCashtag {}.into(),
        TextEntityTypeBotCommand {}.into(),
        TextEntityTypeUrl {}.into(),
        TextEntityTypeEmailAddress {}.into(),
        TextEntityTypePhoneNumber {}.into(),
        TextEntityTypeBankCardNumber {}.into(),
        TextEntityTypeBold {}.into(),
        TextEntityTypeItalic {}.into(),
        TextEntityTypeUnderline {}.into(),
        TextEntityTypeStrikethrough {}.into(),
        TextEntityTypeCode {}.into(),
        TextEntityTypePre {}.into(),
        TextEntityTypePreCode {
            language: "rust".to_string(),
        }
        .into(),
        TextEntityTypeTextUrl {
            url: "https://t.me".to_string(),
        }
        .into(),
        TextEntityTypeMentionName { user_id: 1 << 40 }.into(),
    ])
}

#[test]
fn round_trip_internal_link_type() -> anyhow::Result<()> {
    let s = |v: &str| v.to_string();
    round_trip::<InternalLinkType>(vec![
        InternalLinkTypeActiveSessions {}.into(),
        InternalLinkTypeAuthenticationCode { code: s("12345") }.into(),
        InternalLinkTypeBackground {
            background_name: s("bg"),
        }
        .into(),
        InternalLinkTypeBotStart {
            bot_username: s("bot"),
            start_parameter: s("go"),
        }
        .into(),
        InternalLinkTypeBotStartInGroup {
            bot_username: s("bot"),
            start_parameter: s(""),
        }
        .into(),
        InternalLinkTypeChangePhoneNumber {}.into(),
        InternalLinkTypeChatInvite {
            invite_link: s("https://t.me/+abc"),
        }
        .into(),
        InternalLinkTypeFilterSettings {}.into(),
        InternalLinkTypeGame {
            bot_username: s("bot"),
            game_short_name: s("tetris"),
        }
        .into(),
        InternalLinkTypeLanguagePack {
            language_pack_id: s("en"),
        }
        .into(),
        InternalLinkTypeMessage {
            url: s("tg://privatepost?channel=1&post=2"),
        }
        .into(),
        InternalLinkTypeMessageDraft {
            text: FormattedText {
                text: s("#tag @user"),
                entities: vec![
                    TextEntity {
                        offset: 0,
                        length: 4,
                        r#type: TextEntityTypeHashtag {}.into(),
                    },
                    TextEntity {
                        offset: 5,
                        length: 5,
                        r#type: TextEntityTypeMention {}.into(),
                    },
                ],
            },
            contains_link: true,
        }
        .into(),
        InternalLinkTypeMessageDraft::default().into(),
        InternalLinkTypePassportDataRequest {
            bot_user_id: 42,
            scope: s("{}"),
            public_key: s("key"),
            nonce: s("n"),
            callback_url: s("tg://cb"),
        }
        .into(),
        InternalLinkTypePhoneNumberConfirmation {
            hash: s("h"),
            phone_number: s("+100"),
        }
        .into(),
        InternalLinkTypeProxy {
            server: s("1.2.3.4"),
            port: 1080,
            r#type: socks5(),
        }
        .into(),
        InternalLinkTypePublicChat {
            chat_username: s("rust"),
        }
        .into(),
        InternalLinkTypeQrCodeAuthentication {}.into(),
        InternalLinkTypeSettings {}.into(),
        InternalLinkTypeStickerSet {
            sticker_set_name: s("pack"),
        }
        .into(),
        InternalLinkTypeTheme {
            theme_name: s("night"),
        }
        .into(),
        InternalLinkTypeThemeSettings {}.into(),
        InternalLinkTypeUnknownDeepLink {
            link: s("tg://unknown"),
        }
        .into(),
        InternalLinkTypeVideoChat {
            chat_username: s("rust"),
            invite_hash: s(""),
            is_live_stream: true,
        }
        .into(),
    ])
}

#[test]
fn family_dispatch_scenario() -> anyhow::Result<()> {
    let input = br#"{"@type":"internalLinkTypeProxy","server":"1.2.3.4","port":1080,"type":{"@type":"proxyTypeSocks5","username":"","password":""}}"#;
    let InternalLinkType::Proxy(link) = InternalLinkType::decode(input)? else {
        panic!("not a proxy link");
    };
    assert_eq!(link.server, "1.2.3.4");
    assert_eq!(link.port, 1080);
    assert_eq!(link.r#type, ProxyType::Socks5(ProxyTypeSocks5::default()));
    Ok(())
}

#[test]
fn discriminator_fidelity() -> anyhow::Result<()> {
    let photo = ChatAction::decode(br#"{"@type":"chatActionUploadingPhoto","progress":5}"#)?;
    assert_eq!(
        photo,
        ChatAction::UploadingPhoto(ChatActionUploadingPhoto { progress: 5 })
    );
    let video = ChatAction::decode(br#"{"@type":"chatActionUploadingVideo","progress":5}"#)?;
    assert_eq!(
        video,
        ChatAction::UploadingVideo(ChatActionUploadingVideo { progress: 5 })
    );
    assert_ne!(photo, video);

    let socks = ProxyType::decode(br#"{"@type":"proxyTypeSocks5","username":"a","password":"b","http_only":true}"#)?;
    assert!(matches!(socks, ProxyType::Socks5(_)));
    Ok(())
}

#[test]
fn unknown_tag_is_rejected() {
    for input in [
        &br#"{"@type":"chatActionFlying"}"#[..],
        br#"{"@type":"proxyTypeSocks5"}"#,
        br#"{"@type":"error","code":400,"message":"x"}"#,
    ] {
        match ChatAction::decode(input) {
            Err(Error::UnknownVariant { family, .. }) => assert_eq!(family, "ChatAction"),
            r => panic!("unexpected {r:?}"),
        }
    }
    match ChatAction::decode(br#"{"@type":"chatActionFlying"}"#) {
        Err(Error::UnknownVariant { discriminator, .. }) => {
            assert_eq!(discriminator, "chatActionFlying")
        }
        r => panic!("unexpected {r:?}"),
    }
}

#[test]
fn concrete_decode_checks_tag() {
    match types::Text::decode(br#"{"@type":"httpUrl","url":"https://t.me"}"#) {
        Err(Error::UnknownVariant {
            family,
            discriminator,
        }) => {
            assert_eq!(family, "text");
            assert_eq!(discriminator, "httpUrl");
        }
        r => panic!("unexpected {r:?}"),
    }
}

#[test]
fn malformed_envelope() {
    for input in [&br#"{"text":"x"}"#[..], br#"{"@type":null}"#, b"[]", b"12"] {
        let e = ChatAction::decode(input).unwrap_err();
        assert!(matches!(e, Error::MalformedEnvelope(_)), "{e}");
    }
}

#[test]
fn empty_variant_scenario() -> anyhow::Result<()> {
    let ok = types::Ok::decode(br#"{"@type":"ok"}"#)?;
    assert_eq!(ok, types::Ok {});
    assert_eq!(ok.encode()?, br#"{"@type":"ok"}"#.to_vec());
    Ok(())
}

#[test]
fn encode_embeds_nested_tags() -> anyhow::Result<()> {
    let link = InternalLinkType::from(InternalLinkTypeProxy {
        server: "1.2.3.4".to_string(),
        port: 1080,
        r#type: socks5(),
    });
    let wire: Value = serde_json::from_slice(&link.encode()?)?;
    assert_eq!(
        wire,
        json!({
            "@type": "internalLinkTypeProxy",
            "server": "1.2.3.4",
            "port": 1080,
            "type": {"@type": "proxyTypeSocks5", "username": "user", "password": "secret"}
        })
    );
    Ok(())
}

#[test]
fn large_integer_fidelity() -> anyhow::Result<()> {
    let request = TerminateSession {
        session_id: i64::MAX,
    };
    let wire = serde_json::to_value(&request)?;
    assert_eq!(
        wire,
        json!({"@type": "terminateSession", "session_id": "9223372036854775807"})
    );
    let back: TerminateSession = serde_json::from_value(wire)?;
    assert_eq!(back.session_id, 9223372036854775807);

    let session = Session {
        id: i64::MAX,
        application_name: "app".to_string(),
        ..Session::default()
    };
    let decoded = Session::decode(&session.encode()?)?;
    assert_eq!(decoded.id, i64::MAX);
    assert_eq!(decoded, session);

    let from_number = Session::decode(
        br#"{"@type":"session","id":9223372036854775807,"is_current":true,"is_password_pending":false,"api_id":1,"application_name":"","application_version":"","is_official_application":true,"device_model":"","platform":"","system_version":"","log_in_date":0,"last_active_date":0,"ip":"","country":"","region":""}"#,
    )?;
    assert_eq!(from_number.id, i64::MAX);
    Ok(())
}

#[test]
fn vector_of_nested_families() -> anyhow::Result<()> {
    let input = json!({
        "@type": "proxies",
        "proxies": [
            {"@type": "proxy", "id": 1, "server": "a", "port": 1, "last_used_date": 0, "is_enabled": true,
             "type": {"@type": "proxyTypeMtproto", "secret": "ee"}},
            {"@type": "proxy", "id": 2, "server": "b", "port": 2, "last_used_date": 0, "is_enabled": false,
             "type": {"@type": "proxyTypeHttp", "username": "", "password": "", "http_only": false}}
        ]
    });
    let proxies = Proxies::decode(&serde_json::to_vec(&input)?)?;
    let kinds: Vec<_> = proxies.proxies.iter().map(|p| p.r#type.discriminator()).collect();
    assert_eq!(kinds, ["proxyTypeMtproto", "proxyTypeHttp"]);
    assert_eq!(serde_json::to_value(&proxies)?, input);
    Ok(())
}
