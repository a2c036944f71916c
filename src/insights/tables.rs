//! The spending by category table.

use maud::{Markup, html};

use crate::{
    CategoryTotal,
    alert::Alert,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE},
};

/// Renders the expense total for each category, or a message if there were no
/// expenses in the month.
pub(super) fn category_table_view(categories: &[CategoryTotal]) -> Markup {
    html! {
        section class="w-full"
        {
            h3 class="text-lg font-semibold mb-2" { "Spending by category" }

            @if categories.is_empty() {
                (Alert::info("No transactions found for this month.").into_html())
            } @else {
                div class="relative overflow-x-auto shadow-md rounded-lg"
                {
                    table class=(TABLE_STYLE)
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Amount" }
                            }
                        }

                        tbody
                        {
                            @for category_total in categories {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td class=(TABLE_CELL_STYLE) { (category_total.category) }
                                    td class={(TABLE_CELL_STYLE) " text-right"}
                                    {
                                        (format!("{:.2}", category_total.total))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
