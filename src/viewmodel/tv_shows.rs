use std::sync::Arc;

use futures::stream::BoxStream;

use super::feed::PagedFeed;
use super::scope::ViewModelScope;
use super::{dispatch, paging_error};
use crate::flow::StateFlow;
use crate::models::{TvCategory, TvShow};
use crate::paging::{PagingConfig, PagingData, TvShowsPagingSource};
use crate::repository::TvShowsRepository;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TvShowsState {
    pub category: TvCategory,
    pub shows: PagingData<TvShow>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum TvShowsEvent {
    CategorySelected(TvCategory),
    PageUpdated(TvCategory, PagingData<TvShow>),
}

pub fn reduce(state: &TvShowsState, event: TvShowsEvent) -> TvShowsState {
    match event {
        TvShowsEvent::CategorySelected(category) => TvShowsState {
            category,
            shows: PagingData::default(),
            error_message: None,
        },
        TvShowsEvent::PageUpdated(category, _) if category != state.category => state.clone(),
        TvShowsEvent::PageUpdated(_, shows) => TvShowsState {
            error_message: paging_error(&shows),
            shows,
            ..state.clone()
        },
    }
}

/// TV show lists with one tab per category.
pub struct TvShowsViewModel {
    repository: TvShowsRepository,
    state: StateFlow<TvShowsState>,
    feed: PagedFeed<TvShow>,
    scope: ViewModelScope,
}

impl TvShowsViewModel {
    pub fn new(repository: TvShowsRepository, config: PagingConfig) -> Self {
        let vm = Self {
            repository,
            state: StateFlow::new(TvShowsState::default()),
            feed: PagedFeed::new(config),
            scope: ViewModelScope::new(),
        };
        vm.select_category(TvCategory::default());
        vm
    }

    pub fn state(&self) -> BoxStream<'static, TvShowsState> {
        self.state.stream()
    }

    pub fn current(&self) -> TvShowsState {
        self.state.value()
    }

    pub fn select_category(&self, category: TvCategory) {
        dispatch(&self.state, reduce, TvShowsEvent::CategorySelected(category));

        let source = TvShowsPagingSource::new(self.repository.clone(), category);
        let state = self.state.clone();
        self.feed.attach(&self.scope, Arc::new(source), move |data| {
            dispatch(&state, reduce, TvShowsEvent::PageUpdated(category, data))
        });
    }

    pub fn on_item_accessed(&self, index: usize) {
        self.feed
            .with_pager(&self.scope, move |pager| async move {
                pager.on_item_accessed(index).await
            });
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
