//! Native 1.x code lists.

code_list! {
    /// Layout of a native ad unit (Native 1.0 table 7.1). Dropped in 1.2.
    Layout {
        CONTENT_WALL = 1 => "Content Wall",
        APP_WALL = 2 => "App Wall",
        NEWS_FEED = 3 => "News Feed",
        CHAT_LIST = 4 => "Chat List",
        CAROUSEL = 5 => "Carousel",
        CONTENT_STREAM = 6 => "Content Stream",
        GRID = 7 => "Grid adjoining the content",
    }
}

code_list! {
    /// Core ad unit of a native placement (Native 1.0 table 7.2). Dropped in 1.2.
    AdUnit {
        PAID_SEARCH_UNITS = 1 => "Paid Search Units",
        RECOMMENDATION_WIDGETS = 2 => "Recommendation Widgets",
        PROMOTED_LISTINGS = 3 => "Promoted Listings",
        IN_AD_WITH_NATIVE_ELEMENTS = 4 => "In-Ad (IAB Standard) with Native Element Units",
        CUSTOM = 5 => "Custom / Can't Be Contained",
    }
}

code_list! {
    /// Context the ad appears in.
    ContextType {
        CONTENT = 1 => "Content-centric context",
        SOCIAL = 2 => "Social-centric context",
        PRODUCT = 3 => "Product context",
    }
}

code_list! {
    /// Finer-grained context the ad appears in.
    ContextSubtype {
        GENERAL = 10 => "General or mixed content",
        ARTICLE = 11 => "Primarily article content",
        VIDEO = 12 => "Primarily video content",
        AUDIO = 13 => "Primarily audio content",
        IMAGE = 14 => "Primarily image content",
        USER_GENERATED = 15 => "User-generated content",
        SOCIAL = 20 => "General social content",
        EMAIL = 21 => "Primarily email content",
        CHAT = 22 => "Primarily chat/IM content",
        SELLING = 30 => "Content focused on selling products",
        APP_STORE = 31 => "Application store/marketplace",
        PRODUCT_REVIEW = 32 => "Product reviews site",
    }
}

code_list! {
    /// Where the ad is placed relative to the content.
    PlacementType {
        IN_FEED = 1 => "In the feed of content",
        ATOMIC_UNIT = 2 => "In the atomic unit of the content",
        OUTSIDE = 3 => "Outside the core content",
        RECOMMENDATION_WIDGET = 4 => "Recommendation widget",
    }
}

code_list! {
    /// Kind of a data asset.
    DataAssetType {
        SPONSORED = 1 => "sponsored",
        DESC = 2 => "desc",
        RATING = 3 => "rating",
        LIKES = 4 => "likes",
        DOWNLOADS = 5 => "downloads",
        PRICE = 6 => "price",
        SALE_PRICE = 7 => "saleprice",
        PHONE = 8 => "phone",
        ADDRESS = 9 => "address",
        DESC2 = 10 => "desc2",
        DISPLAY_URL = 11 => "displayurl",
        CTA_TEXT = 12 => "ctatext",
    }
}

code_list! {
    /// Kind of an image asset.
    ImageAssetType {
        ICON = 1 => "Icon",
        /// To be deprecated.
        LOGO = 2 => "Logo",
        MAIN = 3 => "Main",
    }
}

code_list! {
    /// Event a tracker fires on.
    EventType {
        IMPRESSION = 1 => "impression",
        VIEWABLE_MRC50 = 2 => "viewable-mrc50",
        VIEWABLE_MRC100 = 3 => "viewable-mrc100",
        VIEWABLE_VIDEO50 = 4 => "viewable-video50",
    }
}

code_list! {
    /// How a tracker is fired.
    EventTrackingMethod {
        IMAGE = 1 => "img",
        JS = 2 => "js",
    }
}

code_list! {
    /// Video bid response protocol (OpenRTB 2.x list 5.8).
    Protocol {
        VAST_1_0 = 1 => "VAST 1.0",
        VAST_2_0 = 2 => "VAST 2.0",
        VAST_3_0 = 3 => "VAST 3.0",
        VAST_1_0_WRAPPER = 4 => "VAST 1.0 Wrapper",
        VAST_2_0_WRAPPER = 5 => "VAST 2.0 Wrapper",
        VAST_3_0_WRAPPER = 6 => "VAST 3.0 Wrapper",
        VAST_4_0 = 7 => "VAST 4.0",
        VAST_4_0_WRAPPER = 8 => "VAST 4.0 Wrapper",
        DAAST_1_0 = 9 => "DAAST 1.0",
        DAAST_1_0_WRAPPER = 10 => "DAAST 1.0 Wrapper",
    }
}
