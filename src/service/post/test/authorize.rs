use super::*;

/// Tests that a member without staff roles cannot post to either channel.
///
/// Expected: Err(Forbidden(Post)) for Announcement and Update
#[test]
fn non_staff_is_forbidden_for_both_targets() {
    for target in [PostTarget::Announcement, PostTarget::Update] {
        let mut request = request();
        request.requester = requester(false, &["Member"]);
        request.target = target;

        assert_eq!(
            compose_default(&request),
            Err(PostError::Forbidden(Privilege::Post))
        );
    }
}

/// Tests that Support can post without mentions.
///
/// Expected: Ok
#[test]
fn support_can_post() {
    let mut request = request();
    request.requester = requester(false, &["Support"]);

    assert!(compose_default(&request).is_ok());
}

/// Tests that Support cannot ping everyone.
///
/// Expected: Err(Forbidden(MentionEveryone))
#[test]
fn support_cannot_mention_everyone() {
    let mut request = request();
    request.requester = requester(false, &["Support"]);
    request.input.mention_everyone = true;

    assert_eq!(
        compose_default(&request),
        Err(PostError::Forbidden(Privilege::MentionEveryone))
    );
}

/// Tests that administrators may ping everyone without any role.
///
/// Expected: Ok with "@everyone" content and the everyone ping approved
#[test]
fn administrator_can_mention_everyone() {
    let mut request = request();
    request.requester = requester(true, &[]);
    request.input.mention_everyone = true;

    let message = compose_default(&request).unwrap();

    assert_eq!(message.mention_text, "@everyone");
    assert!(message.mention_everyone);
}

/// Tests that permission is checked before the channel.
///
/// Expected: Err(Forbidden(Post)) even though the channel is missing
#[test]
fn permission_is_checked_before_channel() {
    let mut request = request();
    request.requester = requester(false, &[]);
    request.channel_available = false;

    assert_eq!(
        compose_default(&request),
        Err(PostError::Forbidden(Privilege::Post))
    );
}

/// Tests the missing channel rejection.
///
/// Expected: Err(ChannelNotFound(Update)) with the user-facing message naming the channel
#[test]
fn missing_channel_is_reported() {
    let mut request = request();
    request.target = PostTarget::Update;
    request.channel_available = false;

    let result = compose_default(&request);

    assert_eq!(result, Err(PostError::ChannelNotFound(PostTarget::Update)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Update channel not found. Check the ID."
    );
}

/// Tests which channel kinds can receive posts.
///
/// Expected: text and announcement channels only
#[test]
fn only_text_channels_are_capable() {
    use serenity::all::ChannelType;

    assert!(is_text_capable(ChannelType::Text));
    assert!(is_text_capable(ChannelType::News));
    assert!(!is_text_capable(ChannelType::Voice));
    assert!(!is_text_capable(ChannelType::Category));
    assert!(!is_text_capable(ChannelType::Forum));
}
