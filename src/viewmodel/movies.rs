use std::sync::Arc;

use futures::stream::BoxStream;

use super::feed::PagedFeed;
use super::scope::ViewModelScope;
use super::{dispatch, paging_error};
use crate::flow::StateFlow;
use crate::models::{Movie, MovieCategory};
use crate::paging::{MoviesPagingSource, PagingConfig, PagingData};
use crate::repository::MoviesRepository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviesState {
    pub category: MovieCategory,
    pub movies: PagingData<Movie>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum MoviesEvent {
    CategorySelected(MovieCategory),
    /// New snapshot from the pager of `category`
    PageUpdated(MovieCategory, PagingData<Movie>),
}

pub fn reduce(state: &MoviesState, event: MoviesEvent) -> MoviesState {
    match event {
        MoviesEvent::CategorySelected(category) => MoviesState {
            category,
            movies: PagingData::default(),
            error_message: None,
        },
        MoviesEvent::PageUpdated(category, _) if category != state.category => state.clone(),
        MoviesEvent::PageUpdated(_, movies) => MoviesState {
            error_message: paging_error(&movies),
            movies,
            ..state.clone()
        },
    }
}

/// Movie lists with one tab per category.
pub struct MoviesViewModel {
    repository: MoviesRepository,
    state: StateFlow<MoviesState>,
    feed: PagedFeed<Movie>,
    scope: ViewModelScope,
}

impl MoviesViewModel {
    /// Create the view-model and start loading the default category.
    pub fn new(repository: MoviesRepository, config: PagingConfig) -> Self {
        let vm = Self {
            repository,
            state: StateFlow::new(MoviesState::default()),
            feed: PagedFeed::new(config),
            scope: ViewModelScope::new(),
        };
        vm.select_category(MoviesState::default().category);
        vm
    }

    pub fn state(&self) -> BoxStream<'static, MoviesState> {
        self.state.stream()
    }

    pub fn current(&self) -> MoviesState {
        self.state.value()
    }

    /// Switch tabs, restarting paging from the first page.
    pub fn select_category(&self, category: MovieCategory) {
        dispatch(&self.state, reduce, MoviesEvent::CategorySelected(category));

        let source = MoviesPagingSource::new(self.repository.clone(), category);
        let state = self.state.clone();
        self.feed.attach(&self.scope, Arc::new(source), move |data| {
            dispatch(&state, reduce, MoviesEvent::PageUpdated(category, data))
        });
    }

    pub fn on_item_accessed(&self, index: usize) {
        self.feed
            .with_pager(&self.scope, move |pager| async move {
                pager.on_item_accessed(index).await
            });
    }

    pub fn load_next(&self) {
        self.feed
            .with_pager(&self.scope, |pager| async move { pager.load_next().await });
    }

    pub fn retry(&self) {
        self.feed
            .with_pager(&self.scope, |pager| async move { pager.retry().await });
    }

    pub fn refresh(&self) {
        self.feed
            .with_pager(&self.scope, |pager| async move { pager.refresh().await });
    }
}
