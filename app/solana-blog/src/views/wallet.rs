use anchor_lang::prelude::*;

use crate::client::{BlogProgram, PlaceholderProgram};
use crate::config::BlogConfig;
use crate::errors::BlogError;
use crate::instructions::{self, ActionContext};
use crate::interaction::{Interaction, SystemClock, TimeSource, WalletState};
use crate::state::{
    ActionKind, ActionStatus, ActionTracker, Blog, BlogAccounts, BlogPost, FormMode, Post,
    PostFields, PostForm, PostList,
};
use crate::views::surface;

/// Blog view gated on a connected wallet. Every action goes through the
/// program client before the local list changes.
pub struct WalletView<P: BlogProgram = PlaceholderProgram, C: TimeSource = SystemClock> {
    config: BlogConfig,
    wallet: WalletState,
    program: P,
    clock: C,
    posts: PostList,
    form: PostForm,
    blog: Option<Pubkey>,
    status: ActionTracker,
}

impl WalletView<PlaceholderProgram, SystemClock> {
    pub fn new(config: BlogConfig) -> Self {
        Self::with_program(config, PlaceholderProgram, SystemClock)
    }
}

impl<P: BlogProgram, C: TimeSource> WalletView<P, C> {
    pub fn with_program(config: BlogConfig, program: P, clock: C) -> Self {
        let posts = PostList::new(config.post_id_policy, config.limits.in_bytes());
        Self {
            config,
            wallet: WalletState::disconnected(),
            program,
            clock,
            posts,
            form: PostForm::default(),
            blog: None,
            status: ActionTracker::default(),
        }
    }

    /// Switching identity forgets the blog account of the previous one.
    /// Posts stay listed; ids are numbered per author.
    pub fn connect(&mut self, public_key: Pubkey) {
        if self.wallet.public_key() != Some(public_key) {
            self.blog = None;
        }
        self.wallet = WalletState::connected(public_key);
    }

    pub fn disconnect(&mut self) {
        self.wallet = WalletState::disconnected();
        self.form.cancel();
    }

    pub fn wallet(&self) -> &WalletState {
        &self.wallet
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.posts()
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn blog(&self) -> Option<Pubkey> {
        self.blog
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn status(&self, kind: ActionKind) -> ActionStatus {
        self.status.status(kind)
    }

    /// Whether the connected wallet may edit or delete `post_id`.
    pub fn is_author_of(&self, post_id: u64) -> bool {
        match self.wallet.public_key() {
            Some(key) => self.posts.get_by(Some(&key), post_id).is_some(),
            None => false,
        }
    }

    pub fn initialize_blog(&mut self, ui: &mut dyn Interaction) -> Result<Pubkey> {
        let result = instructions::initialize_blog::handler(&mut self.context(&mut *ui));
        surface(ui, result)
    }

    pub fn open_create_form(&mut self) {
        self.form.open_create();
    }

    pub fn open_edit_form(&mut self, post_id: u64) -> Result<()> {
        let post = self
            .posts
            .get_by(self.wallet.public_key().as_ref(), post_id)
            .ok_or(error!(BlogError::PostNotFound))?;
        self.form.open_edit(post);
        Ok(())
    }

    pub fn set_title(&mut self, value: &str) {
        self.form.set_title(value, &self.config.limits.in_bytes());
    }

    pub fn set_content(&mut self, value: &str) {
        self.form.set_content(value, &self.config.limits.in_bytes());
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// Submit the open form; it closes only when the action succeeds.
    pub fn submit(&mut self, ui: &mut dyn Interaction) -> Result<Post> {
        let result = match self.form.submission() {
            Ok((FormMode::Edit(post_id), fields)) => {
                instructions::update_post::handler(&mut self.context(&mut *ui), post_id, fields)
            }
            Ok((_, fields)) => {
                instructions::create_post::handler(&mut self.context(&mut *ui), fields)
            }
            Err(err) => Err(err),
        };
        if result.is_ok() {
            self.form.cancel();
        }
        surface(ui, result)
    }

    pub fn create_post(
        &mut self,
        ui: &mut dyn Interaction,
        title: &str,
        content: &str,
    ) -> Result<Post> {
        let fields = PostFields::new(title, content);
        let result = instructions::create_post::handler(&mut self.context(&mut *ui), fields);
        surface(ui, result)
    }

    pub fn update_post(
        &mut self,
        ui: &mut dyn Interaction,
        post_id: u64,
        title: &str,
        content: &str,
    ) -> Result<Post> {
        let fields = PostFields::new(title, content);
        let result =
            instructions::update_post::handler(&mut self.context(&mut *ui), post_id, fields);
        surface(ui, result)
    }

    /// `Ok(None)` when the user declines the confirmation.
    pub fn delete_post(&mut self, ui: &mut dyn Interaction, post_id: u64) -> Result<Option<Post>> {
        let result = instructions::delete_post::handler(&mut self.context(&mut *ui), post_id);
        surface(ui, result)
    }

    /// Replace the list with the connected wallet's fetched blog and post
    /// accounts. Posts by other authors are skipped.
    pub fn sync_accounts<D: AsRef<[u8]>>(&mut self, blog_data: &[u8], post_data: &[D]) -> Result<usize> {
        let authority = self.wallet.require_connected()?;
        let blog = Blog::decode(blog_data)?;
        require_keys_eq!(blog.authority, authority, BlogError::BlogAuthorityMismatch);

        let mut posts = post_data
            .iter()
            .map(|data| BlogPost::decode(data.as_ref()).map(Post::from))
            .collect::<Result<Vec<_>>>()?;
        posts.retain(|post| post.is_authored_by(&authority));
        posts.sort_by_key(|post| post.post_id);

        let synced = posts.len();
        self.posts = PostList::restore(
            self.config.post_id_policy,
            self.config.limits.in_bytes(),
            posts,
            Some(authority),
            blog.post_count,
        );
        let address = BlogAccounts::derive(&self.config.program_id, authority).blog;
        self.blog = Some(address);

        msg!("Synced {} posts from blog {}", synced, address);

        Ok(synced)
    }

    fn context<'a>(&'a mut self, ui: &'a mut dyn Interaction) -> ActionContext<'a, P, C> {
        ActionContext {
            config: &self.config,
            wallet: &self.wallet,
            program: &mut self.program,
            clock: &self.clock,
            posts: &mut self.posts,
            blog: &mut self.blog,
            status: &mut self.status,
            ui,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CallOutcome, CREATE_PLACEHOLDER, DELETE_PLACEHOLDER, INITIALIZE_PLACEHOLDER};
    use crate::config::{FieldLimits, LengthUnit, PostIdPolicy};
    use crate::interaction::{FixedClock, NoticeKind, ScriptedInteraction, DELETE_PROMPT};
    use crate::state::PostAccounts;

    /// Records every call; rejects calls while `failing` is set.
    #[derive(Default)]
    struct RecordingProgram {
        calls: Vec<(&'static str, Pubkey)>,
        failing: bool,
    }

    impl RecordingProgram {
        fn record(&mut self, name: &'static str, account: Pubkey) -> Result<CallOutcome> {
            if self.failing {
                return err!(BlogError::MathOverflow);
            }
            self.calls.push((name, account));
            Ok(CallOutcome::Confirmed)
        }
    }

    impl BlogProgram for RecordingProgram {
        fn initialize_blog(&mut self, accounts: &BlogAccounts) -> Result<CallOutcome> {
            self.record("initialize_blog", accounts.blog)
        }

        fn create_post(&mut self, accounts: &PostAccounts, _: &str, _: &str) -> Result<CallOutcome> {
            self.record("create_post", accounts.post)
        }

        fn update_post(&mut self, accounts: &PostAccounts, _: &str, _: &str) -> Result<CallOutcome> {
            self.record("update_post", accounts.post)
        }

        fn delete_post(&mut self, accounts: &PostAccounts) -> Result<CallOutcome> {
            self.record("delete_post", accounts.post)
        }
    }

    fn recording_view() -> (WalletView<RecordingProgram, FixedClock>, Pubkey) {
        let mut view = WalletView::with_program(
            BlogConfig::default(),
            RecordingProgram::default(),
            FixedClock(1_700_000_000),
        );
        let author = Pubkey::new_unique();
        view.connect(author);
        (view, author)
    }

    fn encode<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn test_actions_require_connected_wallet() {
        let mut ui = ScriptedInteraction::accepting();
        let mut view = WalletView::new(BlogConfig::default());

        let err = view.create_post(&mut ui, "Title", "Body").unwrap_err();
        assert_eq!(err, BlogError::WalletNotConnected.into());
        assert!(view.initialize_blog(&mut ui).is_err());
        assert!(view.posts().is_empty());
        assert_eq!(
            ui.last_notice().unwrap().message,
            "Please connect your wallet first"
        );
    }

    #[test]
    fn test_placeholder_program_notices_then_applies_locally() {
        let mut ui = ScriptedInteraction::accepting();
        let mut view = WalletView::new(BlogConfig::default());
        let author = Pubkey::new_unique();
        view.connect(author);

        view.initialize_blog(&mut ui).unwrap();
        let post = view.create_post(&mut ui, "My First Post", "Hello world").unwrap();
        assert_eq!(post.author, Some(author));
        assert_eq!(post.post_id, 0);

        let removed = view.delete_post(&mut ui, 0).unwrap().unwrap();
        assert_eq!(removed.title, "My First Post");
        assert!(view.posts().is_empty());

        let messages: Vec<_> = ui.notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![INITIALIZE_PLACEHOLDER, CREATE_PLACEHOLDER, DELETE_PLACEHOLDER]
        );
        assert!(ui.notices.iter().all(|n| n.kind == NoticeKind::Info));
    }

    #[test]
    fn test_initialize_targets_blog_pda_once() {
        let mut ui = ScriptedInteraction::accepting();
        let (mut view, author) = recording_view();

        let blog = view.initialize_blog(&mut ui).unwrap();
        assert_eq!(blog, BlogAccounts::derive(&crate::ID, author).blog);
        assert_eq!(view.blog(), Some(blog));

        let err = view.initialize_blog(&mut ui).unwrap_err();
        assert_eq!(err, BlogError::BlogAlreadyInitialized.into());
        assert_eq!(view.program().calls.len(), 1);
    }

    #[test]
    fn test_create_targets_next_post_pda() {
        let mut ui = ScriptedInteraction::accepting();
        let (mut view, author) = recording_view();

        view.create_post(&mut ui, "My First Post", "first").unwrap();
        view.create_post(&mut ui, "Second Post", "second").unwrap();

        let expected: Vec<_> = (0..2)
            .map(|id| ("create_post", PostAccounts::derive(&crate::ID, author, id).post))
            .collect();
        assert_eq!(view.program().calls, expected);
        assert_eq!(view.status(ActionKind::CreatePost), ActionStatus::Succeeded);
    }

    #[test]
    fn test_program_failure_leaves_state_untouched() {
        let mut ui = ScriptedInteraction::accepting();
        let (mut view, _) = recording_view();
        view.create_post(&mut ui, "Kept", "Body").unwrap();

        view.program.failing = true;
        let err = view.create_post(&mut ui, "Lost", "Body").unwrap_err();
        assert_eq!(err, BlogError::MathOverflow.into());
        assert_eq!(view.posts().len(), 1);
        assert_eq!(
            view.status(ActionKind::CreatePost),
            ActionStatus::Failed("Math overflow detected".into())
        );

        assert!(view.delete_post(&mut ui, 0).is_err());
        assert_eq!(view.posts().len(), 1);
        assert_eq!(ui.last_notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn test_delete_checks_author_in_handler() {
        let mut ui = ScriptedInteraction::accepting();
        let (mut view, _) = recording_view();
        view.create_post(&mut ui, "Mine", "Body").unwrap();

        view.connect(Pubkey::new_unique());
        assert!(!view.is_author_of(0));
        let err = view.delete_post(&mut ui, 0).unwrap_err();
        assert_eq!(err, BlogError::UnauthorizedDelete.into());
        assert_eq!(view.posts().len(), 1);
        // refused before asking
        assert!(ui.prompts.is_empty());
        assert_eq!(view.program().calls.len(), 1);
    }

    #[test]
    fn test_update_checks_author_and_fields() {
        let mut ui = ScriptedInteraction::accepting();
        let (mut view, author) = recording_view();
        view.create_post(&mut ui, "My First Post", "Body").unwrap();

        let err = view.update_post(&mut ui, 0, "", "Some content").unwrap_err();
        assert_eq!(err, BlogError::TitleEmpty.into());

        let post = view
            .update_post(&mut ui, 0, "Updated First Post", "This content has been updated!")
            .unwrap();
        assert_eq!(post.title, "Updated First Post");
        assert_eq!(post.timestamp, 1_700_000_000);
        assert_eq!(post.edited_at, Some(1_700_000_000));

        view.connect(Pubkey::new_unique());
        let err = view.update_post(&mut ui, 0, "Hacked Title", "Hacked Content").unwrap_err();
        assert_eq!(err, BlogError::UnauthorizedUpdate.into());
        assert_eq!(view.posts()[0].title, "Updated First Post");

        view.connect(author);
        assert_eq!(
            view.update_post(&mut ui, 4, "t", "c").unwrap_err(),
            BlogError::PostNotFound.into()
        );
    }

    #[test]
    fn test_declined_delete_skips_program() {
        let mut ui = ScriptedInteraction::declining();
        let (mut view, _) = recording_view();
        view.create_post(&mut ui, "Keep me", "Body").unwrap();

        assert_eq!(view.delete_post(&mut ui, 0).unwrap(), None);
        assert_eq!(ui.prompts, vec![DELETE_PROMPT.to_string()]);
        assert_eq!(view.posts().len(), 1);
        assert_eq!(view.status(ActionKind::DeletePost(0)), ActionStatus::Idle);
    }

    #[test]
    fn test_delete_keeps_other_posts_in_order() {
        let mut ui = ScriptedInteraction::accepting();
        let (mut view, _) = recording_view();
        for title in ["a", "b", "c"] {
            view.create_post(&mut ui, title, "body").unwrap();
        }

        view.delete_post(&mut ui, 1).unwrap();
        let titles: Vec<_> = view.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert_eq!(view.status(ActionKind::DeletePost(1)), ActionStatus::Succeeded);
        assert_eq!(view.status(ActionKind::DeletePost(0)), ActionStatus::Idle);
    }

    #[test]
    fn test_ids_follow_policy_after_delete() {
        let mut ui = ScriptedInteraction::accepting();
        for (policy, expected) in [(PostIdPolicy::ListLength, 1), (PostIdPolicy::Monotonic, 2)] {
            let mut view = WalletView::with_program(
                BlogConfig::default().with_post_id_policy(policy),
                RecordingProgram::default(),
                FixedClock(0),
            );
            view.connect(Pubkey::new_unique());
            view.create_post(&mut ui, "Welcome to Solana Blog", "intro").unwrap();
            view.create_post(&mut ui, "My First Post", "Hello world").unwrap();
            view.delete_post(&mut ui, 0).unwrap();

            let post = view.create_post(&mut ui, "Another", "Text").unwrap();
            assert_eq!(post.post_id, expected);
        }
    }

    #[test]
    fn test_form_submit_creates_and_edits() {
        let mut ui = ScriptedInteraction::accepting();
        let (mut view, _) = recording_view();

        view.open_create_form();
        view.set_title("Draft");
        view.set_content("Body");
        let post = view.submit(&mut ui).unwrap();
        assert!(!view.form().is_open());

        view.open_edit_form(post.post_id).unwrap();
        view.set_content("Edited body");
        let edited = view.submit(&mut ui).unwrap();
        assert_eq!(edited.content, "Edited body");
        assert_eq!(view.posts().len(), 1);

        view.open_create_form();
        view.disconnect();
        assert!(!view.form().is_open());
    }

    #[test]
    fn test_sync_accounts_rebuilds_list() {
        let (mut view, author) = recording_view();
        let blog = Blog {
            authority: author,
            post_count: 3,
        };
        let post = |post_id: u64, author: Pubkey| BlogPost {
            author,
            title: format!("Post {post_id}"),
            content: "body".into(),
            post_id,
            timestamp: 1_700_000_000,
        };
        let accounts = vec![
            encode(&post(2, author)),
            encode(&post(0, author)),
            encode(&post(1, Pubkey::new_unique())),
        ];

        let synced = view.sync_accounts(&encode(&blog), &accounts).unwrap();
        assert_eq!(synced, 2);
        let ids: Vec<_> = view.posts().iter().map(|p| p.post_id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(view.blog(), Some(BlogAccounts::derive(&crate::ID, author).blog));

        let mut ui = ScriptedInteraction::accepting();
        let next = view.create_post(&mut ui, "Fresh", "Body").unwrap();
        assert_eq!(next.post_id, 3);
    }

    #[test]
    fn test_sync_rejects_foreign_blog() {
        let (mut view, _) = recording_view();
        let blog = Blog {
            authority: Pubkey::new_unique(),
            post_count: 0,
        };
        let none: Vec<Vec<u8>> = Vec::new();
        assert_eq!(
            view.sync_accounts(&encode(&blog), &none).unwrap_err(),
            BlogError::BlogAuthorityMismatch.into()
        );
        assert!(view.blog().is_none());
    }

    #[test]
    fn test_switching_identity_numbers_posts_per_author() {
        let mut ui = ScriptedInteraction::accepting();
        let (mut view, alice) = recording_view();
        view.create_post(&mut ui, "Alice's post", "Body").unwrap();

        let bob = Pubkey::new_unique();
        view.connect(bob);
        let post = view.create_post(&mut ui, "Bob's post", "Body").unwrap();
        assert_eq!(post.post_id, 0);
        assert_eq!(post.author, Some(bob));
        assert_eq!(
            view.program().calls.last(),
            Some(&("create_post", PostAccounts::derive(&crate::ID, bob, 0).post))
        );
        assert!(view.is_author_of(0));

        let removed = view.delete_post(&mut ui, 0).unwrap().unwrap();
        assert_eq!(removed.title, "Bob's post");
        let titles: Vec<_> = view.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Alice's post"]);

        view.connect(alice);
        let next = view.create_post(&mut ui, "Alice again", "Body").unwrap();
        assert_eq!(next.post_id, 1);
    }

    #[test]
    fn test_wallet_caps_count_bytes() {
        let mut ui = ScriptedInteraction::accepting();
        let limits = FieldLimits {
            unit: LengthUnit::Chars,
            ..FieldLimits::default()
        };
        let mut view = WalletView::with_program(
            BlogConfig::default().with_limits(limits),
            RecordingProgram::default(),
            FixedClock(0),
        );
        view.connect(Pubkey::new_unique());

        // 100 characters, 200 bytes
        let err = view.create_post(&mut ui, &"é".repeat(100), "Body").unwrap_err();
        assert_eq!(err, BlogError::TitleTooLong.into());
        assert!(view.program().calls.is_empty());
        assert!(view.posts().is_empty());

        view.open_create_form();
        view.set_title(&"é".repeat(100));
        assert_eq!(view.form().fields().title.len(), 100);
    }

    #[test]
    fn test_counter_overflow_is_caught_before_the_call() {
        let mut ui = ScriptedInteraction::accepting();
        let mut view = WalletView::with_program(
            BlogConfig::default(),
            PlaceholderProgram,
            FixedClock(0),
        );
        let author = Pubkey::new_unique();
        view.connect(author);
        let blog = Blog {
            authority: author,
            post_count: u64::MAX,
        };
        let none: Vec<Vec<u8>> = Vec::new();
        view.sync_accounts(&encode(&blog), &none).unwrap();

        let err = view.create_post(&mut ui, "Title", "Body").unwrap_err();
        assert_eq!(err, BlogError::MathOverflow.into());
        assert_eq!(view.status(ActionKind::CreatePost), ActionStatus::Idle);
        assert!(view.posts().is_empty());
        // only the error notice, no placeholder
        assert_eq!(ui.notices.len(), 1);
        assert_eq!(ui.last_notice().unwrap().kind, NoticeKind::Error);
        assert_eq!(ui.last_notice().unwrap().message, "Math overflow detected");
    }
}
