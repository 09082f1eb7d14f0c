use std::{
    future::poll_fn,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    task::Poll,
};

use futures::{
    executor::block_on,
    future::{join_all, BoxFuture},
    stream::{self, BoxStream},
    FutureExt, StreamExt,
};
use injexit::{
    Container, ContainerBuilder, DynError, Inject, InjectError, Injector, Instance, RequireError,
    TypeInfo,
};
use injexit_config::ConfigProvider;
use loadzup::{AssetUri, FetchError, HttpError, Loader, MemoryLoader};
use rand::Rng;
use showzup::{
    CancellationToken, Component, ExecutionMode, LoadError, Loadable, Logger, Node, ShowzupConfig,
    View, ViewBase, ViewLoader, ViewModel, ViewModelError, ViewModelFactory, ViewModelRegistry,
    ViewRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Duplicated(usize),
    Destroyed(usize),
    Injected(usize),
    LoadStarted(usize),
    LoadFinished(usize),
    Returned(usize),
}

/// Everything the test views did, in order
struct Journal {
    events: Mutex<Vec<Event>>,
    next_id: AtomicUsize,
}

impl Journal {
    fn new() -> Arc<Self> {
        Arc::new(Journal {
            events: Mutex::new(Vec::new()),
            // Request indices used as view-models stay below this
            next_id: AtomicUsize::new(1000),
        })
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn count(&self, matches: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|event| matches(event)).count()
    }

    fn position(&self, event: Event) -> usize {
        self.events()
            .iter()
            .position(|recorded| *recorded == event)
            .unwrap_or_else(|| panic!("{event:?} was never recorded"))
    }
}

/// How the test views misbehave
#[derive(Default)]
struct Behavior {
    fail_load: AtomicBool,
    require_missing: AtomicBool,
    cancel_on_duplicate: Mutex<Option<CancellationToken>>,
}

struct Greeting(&'static str);

struct Unregistered;

/// The view the tests ask for
///
/// Events are keyed by the bound view-model when it is a request index, by the
/// component's own id otherwise.
struct BarView {
    base: ViewBase,
    id: usize,
    journal: Arc<Journal>,
    behavior: Arc<Behavior>,
    greeting: Mutex<Option<Arc<Greeting>>>,
}

impl BarView {
    fn new(journal: Arc<Journal>, behavior: Arc<Behavior>) -> Self {
        BarView {
            base: ViewBase::new(),
            id: journal.next_id.fetch_add(1, Ordering::SeqCst),
            journal,
            behavior,
            greeting: Mutex::new(None),
        }
    }

    fn key(&self) -> usize {
        self.view_model()
            .and_then(|view_model| view_model.downcast::<usize>().ok())
            .map_or(self.id, |index| *index)
    }
}

impl Component for BarView {
    fn duplicate(&self) -> Arc<dyn Component> {
        if let Some(token) = &*self.behavior.cancel_on_duplicate.lock().unwrap() {
            token.cancel();
        }

        let copy = BarView {
            base: self.base.duplicate(),
            ..BarView::new(self.journal.clone(), self.behavior.clone())
        };
        self.journal.record(Event::Duplicated(copy.id));
        Arc::new(copy)
    }

    fn into_view(self: Arc<Self>) -> Option<Arc<dyn View>> {
        Some(self)
    }

    fn inject(&self, container: &Container) -> Result<(), InjectError> {
        *self.greeting.lock().unwrap() = container.resolve()?;
        if self.behavior.require_missing.load(Ordering::SeqCst) {
            container.require::<Unregistered>()?;
        }
        self.journal.record(Event::Injected(self.key()));
        Ok(())
    }

    fn on_destroy(&self) {
        self.journal.record(Event::Destroyed(self.key()));
    }
}

impl View for BarView {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn as_loadable(&self) -> Option<&dyn Loadable> {
        Some(self)
    }
}

impl Loadable for BarView {
    fn load(&self) -> BoxFuture<'_, Result<(), DynError>> {
        let yields = rand::thread_rng().gen_range(0..4);
        async move {
            let key = self.key();
            self.journal.record(Event::LoadStarted(key));
            for _ in 0..yields {
                yield_now().await;
            }
            if self.behavior.fail_load.load(Ordering::SeqCst) {
                return Err(DynError::from("bar refused to load"));
            }
            self.journal.record(Event::LoadFinished(key));
            Ok(())
        }
        .boxed()
    }
}

/// A plain component, so templates can lack the requested view
struct Decoration {
    id: usize,
    journal: Arc<Journal>,
}

impl Component for Decoration {
    fn duplicate(&self) -> Arc<dyn Component> {
        Arc::new(Decoration {
            id: self.journal.next_id.fetch_add(1, Ordering::SeqCst),
            journal: self.journal.clone(),
        })
    }

    fn on_destroy(&self) {
        self.journal.record(Event::Destroyed(self.id));
    }
}

/// Suspends once, so concurrent loads interleave
async fn yield_now() {
    let mut yielded = false;
    poll_fn(move |cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await
}

/// Serves from memory after a random number of suspensions
#[derive(Default)]
struct CountingLoader {
    inner: MemoryLoader,
    fetches: AtomicUsize,
    max_yields: usize,
}

impl Loader for CountingLoader {
    fn load_any(
        &self,
        uri: &AssetUri,
        asset_type: TypeInfo,
    ) -> BoxStream<'static, Result<Instance, FetchError>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let yields = rand::thread_rng().gen_range(0..=self.max_yields);
        let emissions = self.inner.load_any(uri, asset_type);

        stream::once(async move {
            for _ in 0..yields {
                yield_now().await;
            }
            emissions
        })
        .flatten()
        .boxed()
    }
}

struct RecordingInjector {
    container: Container,
    injections: AtomicUsize,
}

impl Injector for RecordingInjector {
    fn inject(&self, target: &dyn Inject) -> Result<(), InjectError> {
        self.injections.fetch_add(1, Ordering::SeqCst);
        Injector::inject(&self.container, target)
    }
}

struct CountingFactory {
    inner: ViewModelRegistry,
    calls: AtomicUsize,
}

impl ViewModelFactory for CountingFactory {
    fn create(
        &self,
        model: &Instance,
        view_model_type: TypeInfo,
    ) -> Result<ViewModel, ViewModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create(model, view_model_type)
    }
}

#[derive(Default)]
struct RecordingLogger {
    lines: Mutex<Vec<(String, String)>>,
    errors: Mutex<Vec<(String, String)>>,
}

impl Logger for RecordingLogger {
    fn log(&self, tag: &str, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((tag.to_string(), message.to_string()));
    }

    fn log_error(&self, tag: &str, message: &str) {
        self.errors
            .lock()
            .unwrap()
            .push((tag.to_string(), message.to_string()));
    }
}

struct User {
    name: &'static str,
}

struct UserViewModel {
    title: String,
}

fn services() -> Container {
    block_on(
        ContainerBuilder::new()
            .add_instance(Greeting("hello"))
            .build(),
    )
    .unwrap()
}

fn user_view_models(container: Container) -> ViewModelRegistry {
    ViewModelRegistry::new(container).register(|user: Arc<User>, container: &Container| {
        let greeting = container.require::<Greeting>()?;
        Ok(UserViewModel {
            title: format!("{} {}", greeting.0, user.name),
        })
    })
}

struct Fixture {
    journal: Arc<Journal>,
    behavior: Arc<Behavior>,
    loader: Arc<CountingLoader>,
    injector: Arc<RecordingInjector>,
    factory: Arc<CountingFactory>,
    logger: Arc<RecordingLogger>,
    views: ViewLoader,
}

impl Fixture {
    fn new(mode: ExecutionMode) -> Self {
        Self::with_yields(mode, 0)
    }

    fn with_yields(mode: ExecutionMode, max_yields: usize) -> Self {
        let journal = Journal::new();
        let behavior = Arc::new(Behavior::default());
        let container = services();

        let loader = Arc::new(CountingLoader {
            max_yields,
            ..Default::default()
        });
        let template = BarView::new(journal.clone(), behavior.clone());
        template.set_active(true);
        loader
            .inner
            .insert("ui/Bar", Node::new("Bar", vec![Arc::new(template)]));

        let injector = Arc::new(RecordingInjector {
            container: container.clone(),
            injections: AtomicUsize::new(0),
        });
        let factory = Arc::new(CountingFactory {
            inner: user_view_models(container),
            calls: AtomicUsize::new(0),
        });
        let logger = Arc::new(RecordingLogger::default());

        let views = ViewLoader::new(loader.clone(), injector.clone(), factory.clone())
            .with_logger(logger.clone())
            .with_config(&ShowzupConfig {
                execution_mode: mode,
            });

        Fixture {
            journal,
            behavior,
            loader,
            injector,
            factory,
            logger,
            views,
        }
    }

    fn fetches(&self) -> usize {
        self.loader.fetches.load(Ordering::SeqCst)
    }

    fn injections(&self) -> usize {
        self.injector.injections.load(Ordering::SeqCst)
    }

    fn view_model_calls(&self) -> usize {
        self.factory.calls.load(Ordering::SeqCst)
    }

    fn error_logs(&self) -> Vec<String> {
        self.logger
            .errors
            .lock()
            .unwrap()
            .iter()
            .map(|(tag, message)| {
                assert_eq!(tag, "ViewLoader");
                message.clone()
            })
            .collect()
    }

    fn load(
        &self,
        request: ViewRequest,
        cancellation: &CancellationToken,
    ) -> Result<Option<Arc<dyn View>>, LoadError> {
        block_on(self.views.load(request, cancellation))
    }
}

fn bar_request(view_model: Option<ViewModel>) -> ViewRequest {
    ViewRequest::from_view_model::<BarView>(view_model, "ui/Bar")
}

fn user_request() -> ViewRequest {
    ViewRequest::from_model::<UserViewModel, BarView>(Instance::new(User { name: "Ada" }), "ui/Bar")
}

fn cancelled() -> CancellationToken {
    let token = CancellationToken::new();
    token.cancel();
    token
}

#[test]
fn cancelled_loads_do_no_work() {
    let fixture = Fixture::new(ExecutionMode::Development);

    for request in [bar_request(None), user_request()] {
        assert!(fixture.load(request, &cancelled()).unwrap().is_none());
    }

    assert_eq!(fixture.fetches(), 0);
    assert_eq!(fixture.view_model_calls(), 0);
    assert_eq!(fixture.injections(), 0);
    assert!(fixture.journal.events().is_empty());
}

#[test]
fn partial_request_binds_injects_and_loads_a_fresh_instance() {
    let fixture = Fixture::new(ExecutionMode::Development);

    let view = fixture
        .load(bar_request(Some(Instance::new(7_usize))), &CancellationToken::new())
        .unwrap()
        .unwrap();

    assert_eq!(view.component_type(), TypeInfo::of::<BarView>());
    assert!(!view.is_active());
    assert_eq!(*view.view_model().unwrap().downcast::<usize>().unwrap(), 7);
    assert!(!view.node().unwrap().is_destroyed());
    assert_eq!(fixture.fetches(), 1);
    assert_eq!(fixture.injections(), 1);

    // The development duplicate is discarded, the instance made from it is kept
    let events = fixture.journal.events();
    let (duplicate, instance, destroyed) = match events[..3] {
        [
            Event::Duplicated(duplicate),
            Event::Duplicated(instance),
            Event::Destroyed(destroyed),
        ] => (duplicate, instance, destroyed),
        _ => panic!("unexpected events {events:?}"),
    };
    assert_eq!(destroyed, duplicate);
    assert_ne!(instance, duplicate);
    assert_eq!(
        events[3..],
        [
            Event::Injected(7),
            Event::LoadStarted(7),
            Event::LoadFinished(7)
        ]
    );

    // The fetched template is left as it was
    let template = fixture.loader.inner.load_any(&"ui/Bar".into(), TypeInfo::of::<Node>());
    let template = block_on(template.collect::<Vec<_>>()).remove(0).unwrap();
    let template = template.downcast::<Node>().unwrap();
    assert!(template.views().all(|view| view.is_active()));
}

#[test]
fn loaded_view_owns_its_instance_until_destroyed() {
    let fixture = Fixture::new(ExecutionMode::Production);

    let view = fixture
        .load(bar_request(Some(Instance::new(4_usize))), &CancellationToken::new())
        .unwrap()
        .unwrap();

    let instance = view.node().expect("loaded view keeps its instance");
    assert_eq!(instance.name(), "Bar");
    assert!(instance.views().any(|attached| Arc::ptr_eq(&attached, &view)));
    assert_eq!(fixture.journal.count(|event| *event == Event::Destroyed(4)), 0);

    instance.destroy();
    drop(instance);

    assert_eq!(fixture.journal.count(|event| *event == Event::Destroyed(4)), 1);
    assert!(view.node().is_none());
}

#[test]
fn production_mode_instantiates_the_template_directly() {
    let fixture = Fixture::new(ExecutionMode::Production);

    let view = fixture
        .load(bar_request(None), &CancellationToken::new())
        .unwrap()
        .unwrap();

    assert!(!view.is_active());
    assert_eq!(
        fixture
            .journal
            .count(|event| matches!(event, Event::Duplicated(_))),
        1
    );
    assert_eq!(
        fixture
            .journal
            .count(|event| matches!(event, Event::Destroyed(_))),
        0
    );
}

#[test]
fn full_request_derives_the_view_model_from_the_model() {
    let fixture = Fixture::new(ExecutionMode::Development);

    let view = fixture
        .load(user_request(), &CancellationToken::new())
        .unwrap()
        .unwrap();

    let view_model = view.view_model().unwrap().downcast::<UserViewModel>().unwrap();
    assert_eq!(view_model.title, "hello Ada");
    assert_eq!(fixture.view_model_calls(), 1);
    assert_eq!(fixture.fetches(), 1);
}

#[test]
fn view_model_failure_stops_before_fetching() {
    let fixture = Fixture::new(ExecutionMode::Development);
    let request =
        ViewRequest::from_model::<UserViewModel, BarView>(Instance::new(42_u32), "ui/Bar");

    let err = fixture.load(request, &CancellationToken::new()).unwrap_err();

    let LoadError::ViewModel {
        view_model_type,
        source,
    } = &err
    else {
        panic!("expected a view-model error, got {err:?}");
    };
    assert_eq!(*view_model_type, TypeInfo::of::<UserViewModel>());
    assert!(matches!(source, ViewModelError::Unregistered { .. }));
    assert_eq!(fixture.fetches(), 0);
    assert_eq!(fixture.error_logs().len(), 1);
}

#[test]
fn template_without_the_view_is_rejected_and_destroyed() {
    let fixture = Fixture::new(ExecutionMode::Production);
    let decoration = Decoration {
        id: 1,
        journal: fixture.journal.clone(),
    };
    fixture
        .loader
        .inner
        .insert("ui/Foo", Node::new("Foo", vec![Arc::new(decoration)]));

    let err = fixture
        .load(
            ViewRequest::from_view_model::<BarView>(None, "ui/Foo"),
            &CancellationToken::new(),
        )
        .unwrap_err();

    assert!(matches!(
        &err,
        LoadError::MissingViewComponent { instance, view_type }
            if instance == "Foo" && *view_type == TypeInfo::of::<BarView>()
    ));
    let message = err.to_string();
    assert!(message.contains("Foo") && message.contains("BarView"), "{message}");
    assert_eq!(fixture.error_logs(), vec![message]);

    assert_eq!(
        fixture
            .journal
            .count(|event| matches!(event, Event::Destroyed(_))),
        1
    );
    assert_eq!(fixture.injections(), 0);
}

#[test]
fn cancelling_while_cloning_destroys_the_clone() {
    let fixture = Fixture::new(ExecutionMode::Production);
    let token = CancellationToken::new();
    *fixture.behavior.cancel_on_duplicate.lock().unwrap() = Some(token.clone());

    let view = fixture.load(bar_request(None), &token).unwrap();

    assert!(view.is_none());
    let events = fixture.journal.events();
    let [Event::Duplicated(clone), Event::Destroyed(destroyed)] = events[..] else {
        panic!("unexpected events {events:?}");
    };
    assert_eq!(clone, destroyed);
    assert_eq!(fixture.injections(), 0);
}

#[test]
fn prebuilt_view_is_injected_and_loaded_only() {
    let fixture = Fixture::new(ExecutionMode::Development);
    let bar = Arc::new(BarView::new(fixture.journal.clone(), fixture.behavior.clone()));
    let request = ViewRequest::prebuilt(bar.clone(), Some(Instance::new(3_usize)));

    // Pre-built views don't observe cancellation
    let view = fixture.load(request, &cancelled()).unwrap().unwrap();

    assert!(Arc::ptr_eq(&view, &(bar.clone() as Arc<dyn View>)));
    assert!(bar.greeting.lock().unwrap().is_some());
    assert_eq!(fixture.injections(), 1);
    assert_eq!(fixture.fetches(), 0);
    assert_eq!(fixture.view_model_calls(), 0);
    assert_eq!(
        fixture.journal.events(),
        [
            Event::Injected(3),
            Event::LoadStarted(3),
            Event::LoadFinished(3)
        ]
    );
}

#[test]
fn prebuilt_view_failure_keeps_the_view_alive() {
    let fixture = Fixture::new(ExecutionMode::Development);
    fixture.behavior.fail_load.store(true, Ordering::SeqCst);
    let bar = Arc::new(BarView::new(fixture.journal.clone(), fixture.behavior.clone()));
    let node = Node::new("Bar", vec![bar.clone()]);

    let err = fixture
        .load(ViewRequest::prebuilt(bar, None), &CancellationToken::new())
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Initialization { view, .. } if view == TypeInfo::of::<BarView>()
    ));
    assert!(!node.is_destroyed());
}

#[test]
fn fetch_failures_name_the_view_and_uri() {
    let fixture = Fixture::new(ExecutionMode::Development);
    fixture.loader.inner.insert_failure(
        "ui/Broken",
        HttpError::from_raw("404 Not Found", None, Default::default()).into(),
    );

    let err = fixture
        .load(
            ViewRequest::from_view_model::<BarView>(None, "ui/Broken"),
            &CancellationToken::new(),
        )
        .unwrap_err();

    let LoadError::Fetch {
        view_type,
        uri,
        source,
    } = &err
    else {
        panic!("expected a fetch error, got {err:?}");
    };
    assert_eq!(*view_type, TypeInfo::of::<BarView>());
    assert_eq!(uri.as_str(), "ui/Broken");
    assert_eq!(source.status(), Some(404));
    assert_eq!(fixture.error_logs(), vec![err.to_string()]);
    assert!(fixture.journal.events().is_empty());
}

#[test]
fn fetch_without_emissions_fails() {
    let fixture = Fixture::new(ExecutionMode::Development);
    fixture.loader.inner.insert_emissions("ui/Nothing", vec![]);

    let err = fixture
        .load(
            ViewRequest::from_view_model::<BarView>(None, "ui/Nothing"),
            &CancellationToken::new(),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Fetch {
            source: FetchError::Empty { .. },
            ..
        }
    ));
}

#[test]
fn last_emission_is_the_template() {
    let fixture = Fixture::new(ExecutionMode::Production);
    let stale = Decoration {
        id: 1,
        journal: fixture.journal.clone(),
    };
    let fresh = BarView::new(fixture.journal.clone(), fixture.behavior.clone());
    fixture.loader.inner.insert_emissions(
        "ui/Cached",
        vec![
            Instance::new(Node::new("Stale", vec![Arc::new(stale)])),
            Instance::new(Node::new("Fresh", vec![Arc::new(fresh)])),
        ],
    );

    let view = fixture
        .load(
            ViewRequest::from_view_model::<BarView>(None, "ui/Cached"),
            &CancellationToken::new(),
        )
        .unwrap()
        .unwrap();

    assert_eq!(view.node().unwrap().name(), "Fresh");
}

#[test]
fn empty_request_does_nothing() {
    let fixture = Fixture::new(ExecutionMode::Development);

    let view = fixture
        .load(ViewRequest::default(), &CancellationToken::new())
        .unwrap();

    assert!(view.is_none());
    assert_eq!(fixture.fetches(), 0);
    assert_eq!(fixture.injections(), 0);
}

#[test]
fn injection_failure_skips_load_and_destroys_the_instance() {
    let fixture = Fixture::new(ExecutionMode::Production);
    fixture.behavior.require_missing.store(true, Ordering::SeqCst);

    let err = fixture
        .load(bar_request(Some(Instance::new(5_usize))), &CancellationToken::new())
        .unwrap_err();

    assert!(matches!(
        err,
        LoadError::Injection(InjectError::RequireError(RequireError::TypeMissing(_)))
    ));
    assert_eq!(
        fixture
            .journal
            .count(|event| matches!(event, Event::LoadStarted(_))),
        0
    );
    assert_eq!(fixture.journal.count(|event| *event == Event::Destroyed(5)), 1);
}

#[test]
fn load_failure_destroys_the_instance() {
    let fixture = Fixture::new(ExecutionMode::Production);
    fixture.behavior.fail_load.store(true, Ordering::SeqCst);

    let err = fixture
        .load(bar_request(Some(Instance::new(2_usize))), &CancellationToken::new())
        .unwrap_err();

    assert!(err.to_string().contains("bar refused to load"), "{err}");
    assert!(
        fixture.journal.position(Event::LoadStarted(2))
            < fixture.journal.position(Event::Destroyed(2))
    );
}

#[test]
fn concurrent_loads_inject_before_loading_and_load_before_returning() {
    const REQUESTS: usize = 8;

    for _ in 0..100 {
        let fixture = Fixture::with_yields(ExecutionMode::Development, 3);

        let loads = (0..REQUESTS).map(|index| {
            let fixture = &fixture;
            async move {
                let view = fixture
                    .views
                    .load(bar_request(Some(Instance::new(index))), &CancellationToken::new())
                    .await
                    .unwrap();
                assert!(view.is_some());
                fixture.journal.record(Event::Returned(index));
            }
        });
        block_on(join_all(loads));

        for index in 0..REQUESTS {
            let injected = fixture.journal.position(Event::Injected(index));
            let started = fixture.journal.position(Event::LoadStarted(index));
            let finished = fixture.journal.position(Event::LoadFinished(index));
            let returned = fixture.journal.position(Event::Returned(index));
            assert!(injected < started && started < finished && finished < returned);
        }
        assert_eq!(fixture.injections(), REQUESTS);
    }
}

#[test]
fn progress_is_logged_with_the_pipeline_tag() {
    let fixture = Fixture::new(ExecutionMode::Development);

    fixture
        .load(bar_request(None), &CancellationToken::new())
        .unwrap();

    let lines = fixture.logger.lines.lock().unwrap().clone();
    assert!(lines.iter().all(|(tag, _)| tag == "ViewLoader"));
    assert!(lines
        .iter()
        .any(|(_, message)| message == "Loading view 'BarView' from 'ui/Bar'"));
    assert!(fixture.error_logs().is_empty());
}

#[test]
fn pipeline_is_wired_from_the_container() {
    let journal = Journal::new();
    let behavior = Arc::new(Behavior::default());
    let template = BarView::new(journal.clone(), behavior);
    template.set_active(true);
    let assets = MemoryLoader::new();
    assets.insert("ui/Bar", Node::new("Bar", vec![Arc::new(template)]));

    let mut config = ConfigProvider::new();
    config
        .add_config(ShowzupConfig {
            execution_mode: ExecutionMode::Production,
        })
        .unwrap();

    let container = block_on(
        ContainerBuilder::new()
            .add_instance(Greeting("hi"))
            .add_instance(config)
            .add_instance(Arc::new(assets) as Arc<dyn Loader>)
            .add_instance(Arc::new(user_view_models(services())) as Arc<dyn ViewModelFactory>)
            .build(),
    )
    .unwrap();

    let views = ViewLoader::from_container(&container).unwrap();
    assert_eq!(views.materializer().mode(), ExecutionMode::Production);

    let view = block_on(views.load(user_request(), &CancellationToken::new()))
        .unwrap()
        .unwrap();
    assert!(!view.is_active());
    assert_eq!(journal.count(|event| matches!(event, Event::Injected(_))), 1);
}

#[test]
fn wiring_requires_a_loader() {
    let err = ViewLoader::from_container(&services()).unwrap_err();

    assert!(matches!(
        err,
        InjectError::RequireError(RequireError::TypeMissing(_))
    ));
}
