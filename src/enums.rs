//! Families of objects sharing one abstract type.
use crate::types::*;

family! {
    /// Describes the different types of activity in a chat.
    pub enum ChatAction {
        Typing(ChatActionTyping),
        RecordingVideo(ChatActionRecordingVideo),
        UploadingVideo(ChatActionUploadingVideo),
        RecordingVoiceNote(ChatActionRecordingVoiceNote),
        UploadingVoiceNote(ChatActionUploadingVoiceNote),
        UploadingPhoto(ChatActionUploadingPhoto),
        UploadingDocument(ChatActionUploadingDocument),
        ChoosingSticker(ChatActionChoosingSticker),
        ChoosingLocation(ChatActionChoosingLocation),
        ChoosingContact(ChatActionChoosingContact),
        StartPlayingGame(ChatActionStartPlayingGame),
        RecordingVideoNote(ChatActionRecordingVideoNote),
        UploadingVideoNote(ChatActionUploadingVideoNote),
        WatchingAnimations(ChatActionWatchingAnimations),
        Cancel(ChatActionCancel),
    }
}

family! {
    /// Describes the type of a proxy server.
    pub enum ProxyType {
        Socks5(ProxyTypeSocks5),
        Http(ProxyTypeHttp),
        Mtproto(ProxyTypeMtproto),
    }
}

family! {
    /// Describes a list of chats.
    pub enum ChatList {
        Main(ChatListMain),
        Archive(ChatListArchive),
        Filter(ChatListFilter),
    }
}

family! {
    /// Represents a part of the text which must be formatted differently.
    pub enum TextEntityType {
        Mention(TextEntityTypeMention),
        Hashtag(TextEntityTypeHashtag),
        Cashtag(TextEntityTypeCashtag),
        BotCommand(TextEntityTypeBotCommand),
        Url(TextEntityTypeUrl),
        EmailAddress(TextEntityTypeEmailAddress),
        PhoneNumber(TextEntityTypePhoneNumber),
        BankCardNumber(TextEntityTypeBankCardNumber),
        Bold(TextEntityTypeBold),
        Italic(TextEntityTypeItalic),
        Underline(TextEntityTypeUnderline),
        Strikethrough(TextEntityTypeStrikethrough),
        Code(TextEntityTypeCode),
        Pre(TextEntityTypePre),
        PreCode(TextEntityTypePreCode),
        TextUrl(TextEntityTypeTextUrl),
        MentionName(TextEntityTypeMentionName),
    }
}

family! {
    /// Contains the type of a Telegram Passport element.
    pub enum PassportElementType {
        PersonalDetails(PassportElementTypePersonalDetails),
        Passport(PassportElementTypePassport),
        DriverLicense(PassportElementTypeDriverLicense),
        IdentityCard(PassportElementTypeIdentityCard),
        InternalPassport(PassportElementTypeInternalPassport),
        Address(PassportElementTypeAddress),
        UtilityBill(PassportElementTypeUtilityBill),
        BankStatement(PassportElementTypeBankStatement),
        RentalAgreement(PassportElementTypeRentalAgreement),
        PassportRegistration(PassportElementTypePassportRegistration),
        TemporaryRegistration(PassportElementTypeTemporaryRegistration),
        PhoneNumber(PassportElementTypePhoneNumber),
        EmailAddress(PassportElementTypeEmailAddress),
    }
}

family! {
    /// Describes an internal https://t.me or tg: link, which must be processed by the app in a special way.
    pub enum InternalLinkType {
        ActiveSessions(InternalLinkTypeActiveSessions),
        AuthenticationCode(InternalLinkTypeAuthenticationCode),
        Background(InternalLinkTypeBackground),
        BotStart(InternalLinkTypeBotStart),
        BotStartInGroup(InternalLinkTypeBotStartInGroup),
        ChangePhoneNumber(InternalLinkTypeChangePhoneNumber),
        ChatInvite(InternalLinkTypeChatInvite),
        FilterSettings(InternalLinkTypeFilterSettings),
        Game(InternalLinkTypeGame),
        LanguagePack(InternalLinkTypeLanguagePack),
        Message(InternalLinkTypeMessage),
        MessageDraft(InternalLinkTypeMessageDraft),
        PassportDataRequest(InternalLinkTypePassportDataRequest),
        PhoneNumberConfirmation(InternalLinkTypePhoneNumberConfirmation),
        Proxy(InternalLinkTypeProxy),
        PublicChat(InternalLinkTypePublicChat),
        QrCodeAuthentication(InternalLinkTypeQrCodeAuthentication),
        Settings(InternalLinkTypeSettings),
        StickerSet(InternalLinkTypeStickerSet),
        Theme(InternalLinkTypeTheme),
        ThemeSettings(InternalLinkTypeThemeSettings),
        UnknownDeepLink(InternalLinkTypeUnknownDeepLink),
        VideoChat(InternalLinkTypeVideoChat),
    }
}
